//! Hypothesis space enumeration
//!
//! Every code of a given size, in canonical order, and the shrinking set of
//! codes still consistent with the feedback seen so far.

use crate::core::{Code, GameSize};

/// The complete space of C^P codes for a game size
///
/// Codes are produced by mixed-radix counting in base C with position 0 as the
/// most significant digit, so index order and lexicographic order coincide.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    size: GameSize,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate every code of `size`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameSize;
    /// use mastermind_solver::solver::CodeSpace;
    ///
    /// let space = CodeSpace::enumerate(GameSize::CLASSIC);
    /// assert_eq!(space.len(), 1296);
    /// assert_eq!(space.codes()[7].to_string(), "0011");
    /// ```
    #[must_use]
    pub fn enumerate(size: GameSize) -> Self {
        let total = size.space_size();
        let colors = u64::from(size.colors());
        let positions = size.positions();

        let codes = (0..total)
            .map(|index| {
                let mut colors_at = vec![0u8; positions];
                let mut remainder = index;
                for slot in colors_at.iter_mut().rev() {
                    *slot = (remainder % colors) as u8;
                    remainder /= colors;
                }
                Code::new(colors_at)
            })
            .collect();

        Self { size, codes }
    }

    /// The game size this space was built for
    #[must_use]
    pub const fn size(&self) -> GameSize {
        self.size
    }

    /// Every code, sorted
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of codes (C^P)
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Only true for a degenerate size, which `GameSize` rules out
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// A hypothesis set holding the whole space
    #[must_use]
    pub fn hypotheses(&self) -> HypothesisSet {
        HypothesisSet {
            codes: self.codes.clone(),
        }
    }
}

/// Codes still consistent with every observation
///
/// Kept sorted, so membership is a binary search and iteration order is
/// deterministic. The set only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypothesisSet {
    codes: Vec<Code>,
}

impl HypothesisSet {
    /// Build a set from arbitrary codes; duplicates are dropped
    #[must_use]
    pub fn from_codes(mut codes: Vec<Code>) -> Self {
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Number of remaining hypotheses
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True once every hypothesis has been eliminated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Remaining codes in lexicographic order
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    /// Iterate the remaining codes in lexicographic order
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Smallest remaining code
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    /// Keep only the codes for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Code) -> bool,
    {
        self.codes.retain(keep);
    }
}

impl<'a> IntoIterator for &'a HypothesisSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
