//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts returned after a guess:
//! - exact: positions where guess and secret hold the same color (black pegs)
//! - partial: further colors present in both, but out of position (white pegs)
//!
//! A color is never counted twice; `exact + partial <= P` always holds.

use super::size::{MAX_COLORS, MAX_POSITIONS};
use super::{Code, CodeError, GameSize};
use std::fmt;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The winning feedback for a size: every position exact
    #[inline]
    #[must_use]
    pub const fn perfect(size: GameSize) -> Self {
        Self::new(size.positions() as u8, 0)
    }

    /// Number of exact-position matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right-color, wrong-position matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if this feedback wins a game with `positions` positions
    #[inline]
    #[must_use]
    pub const fn is_win(self, positions: usize) -> bool {
        self.exact as usize == positions && self.partial == 0
    }

    /// Dense slot for this feedback in a table of `size.feedback_slots()` entries
    #[inline]
    #[must_use]
    pub const fn slot(self, size: GameSize) -> usize {
        self.exact as usize * (size.positions() + 1) + self.partial as usize
    }

    /// Inverse of [`Feedback::slot`]
    #[inline]
    #[must_use]
    pub const fn from_slot(slot: usize, size: GameSize) -> Self {
        let stride = size.positions() + 1;
        Self::new((slot / stride) as u8, (slot % stride) as u8)
    }

    /// Every feedback value a game of this size can produce
    ///
    /// Ordered by exact count ascending, then partial count descending.
    /// `(P-1, 1)` is included even though no real guess can produce it.
    #[must_use]
    pub fn all(size: GameSize) -> Vec<Self> {
        let positions = size.positions() as u8;
        (0..=positions)
            .flat_map(|exact| {
                (0..=positions - exact)
                    .rev()
                    .map(move |partial| Self::new(exact, partial))
            })
            .collect()
    }

    /// Score `guess` against `actual`
    ///
    /// # Algorithm
    /// 1. exact = positions holding equal colors
    /// 2. For each color, take the smaller of its counts in guess and actual;
    ///    the sum is every color hit, exact or not
    /// 3. partial = that sum minus exact
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the codes differ in length, `ColorOutOfRange`
    /// if either uses a color `>= colors`, and `InvalidSize` if `colors` or the
    /// code length exceeds the supported bounds.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::from([5, 4, 3, 2]);
    /// let guess = Code::from([1, 2, 3, 4]);
    /// let feedback = Feedback::check(&guess, &secret, 6).unwrap();
    ///
    /// // 3 in place, 2 and 4 present elsewhere
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn check(guess: &Code, actual: &Code, colors: u8) -> Result<Self, CodeError> {
        if guess.len() != actual.len() {
            return Err(CodeError::LengthMismatch {
                expected: actual.len(),
                actual: guess.len(),
            });
        }
        if colors > MAX_COLORS || guess.len() > MAX_POSITIONS {
            return Err(CodeError::InvalidSize {
                positions: guess.len(),
                colors,
            });
        }

        let mut guess_counts = [0u8; MAX_COLORS as usize];
        let mut actual_counts = [0u8; MAX_COLORS as usize];
        let mut exact = 0u8;

        for (&g, &a) in guess.colors().iter().zip(actual.colors()) {
            for color in [g, a] {
                if color >= colors {
                    return Err(CodeError::ColorOutOfRange { color, colors });
                }
            }
            if g == a {
                exact += 1;
            }
            guess_counts[usize::from(g)] += 1;
            actual_counts[usize::from(a)] += 1;
        }

        let hits: u8 = guess_counts
            .iter()
            .zip(&actual_counts)
            .map(|(&x, &y)| x.min(y))
            .sum();

        Ok(Self::new(exact, hits - exact))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, GameSize::CLASSIC).unwrap()
    }

    #[test]
    fn known_results_against_5432() {
        let secret = code("5432");
        let cases = [
            ("1111", Feedback::new(0, 0)),
            ("1234", Feedback::new(1, 2)),
            ("1235", Feedback::new(1, 2)),
            ("4321", Feedback::new(0, 3)),
            ("5321", Feedback::new(1, 2)),
            ("5431", Feedback::new(3, 0)),
            ("5432", Feedback::new(4, 0)),
        ];

        for (guess, expected) in cases {
            let feedback = Feedback::check(&code(guess), &secret, 6).unwrap();
            assert_eq!(feedback, expected, "guess {guess}");
        }
    }

    #[test]
    fn duplicate_colors_not_double_counted() {
        // secret has a single 1; the guess's three 1s can only hit once
        let feedback = Feedback::check(&code("1110"), &code("2301"), 6).unwrap();
        assert_eq!(feedback, Feedback::new(0, 2));

        let feedback = Feedback::check(&code("0011"), &code("0101"), 6).unwrap();
        assert_eq!(feedback, Feedback::new(2, 2));
    }

    #[test]
    fn self_match_is_perfect() {
        for text in ["0000", "0011", "5432", "5555"] {
            let c = code(text);
            let feedback = Feedback::check(&c, &c, 6).unwrap();
            assert_eq!(feedback, Feedback::perfect(GameSize::CLASSIC));
            assert!(feedback.is_win(4));
        }
    }

    #[test]
    fn symmetric_and_bounded_over_small_space() {
        let size = GameSize::new(3, 4).unwrap();
        let codes: Vec<Code> = (0..64u8)
            .map(|i| Code::from([i / 16, (i / 4) % 4, i % 4]))
            .collect();

        for a in &codes {
            for b in &codes {
                let ab = Feedback::check(a, b, size.colors()).unwrap();
                let ba = Feedback::check(b, a, size.colors()).unwrap();
                assert_eq!(ab, ba);
                assert!(usize::from(ab.exact() + ab.partial()) <= size.positions());
                assert_eq!(ab, Feedback::check(a, b, size.colors()).unwrap());
            }
        }
    }

    #[test]
    fn length_mismatch_rejected() {
        let result = Feedback::check(&Code::from([1, 2, 3]), &code("5432"), 6);
        assert_eq!(
            result,
            Err(CodeError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn out_of_range_color_rejected() {
        let result = Feedback::check(&Code::from([1, 2, 3, 9]), &code("5432"), 6);
        assert_eq!(
            result,
            Err(CodeError::ColorOutOfRange {
                color: 9,
                colors: 6
            })
        );
    }

    #[test]
    fn oversized_codes_rejected() {
        let long = Code::new(vec![0; 300]);
        assert_eq!(
            Feedback::check(&long, &long, 6),
            Err(CodeError::InvalidSize {
                positions: 300,
                colors: 6
            })
        );

        let eleven = Code::new(vec![1; 11]);
        assert!(Feedback::check(&eleven, &eleven, 6).is_err());
    }

    #[test]
    fn full_alphabet_supported() {
        let a = Code::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let b = Code::from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(Feedback::check(&a, &b, 10).unwrap(), Feedback::new(0, 10));
    }

    #[test]
    fn all_feedback_values() {
        let all = Feedback::all(GameSize::CLASSIC);
        assert_eq!(all.len(), 15);
        assert_eq!(all[0], Feedback::new(0, 4));
        assert_eq!(all[14], Feedback::new(4, 0));
    }

    #[test]
    fn slot_round_trip() {
        let size = GameSize::CLASSIC;
        for feedback in Feedback::all(size) {
            let slot = feedback.slot(size);
            assert!(slot < size.feedback_slots());
            assert_eq!(Feedback::from_slot(slot, size), feedback);
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1-2");
    }
}
