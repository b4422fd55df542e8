//! Game dimensions
//!
//! A `GameSize` fixes the number of positions in a code and the size of the
//! color alphabet. Both are bounded so the hypothesis space stays enumerable.

use super::CodeError;
use std::fmt;

/// Largest supported number of positions
pub const MAX_POSITIONS: usize = 10;

/// Largest supported number of colors
pub const MAX_COLORS: u8 = 10;

/// Positions × colors of a game, used as the opening-book cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameSize {
    positions: usize,
    colors: u8,
}

impl GameSize {
    /// The classic board: 4 positions, 6 colors
    pub const CLASSIC: Self = Self {
        positions: 4,
        colors: 6,
    };

    /// Create a validated game size
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSize` unless `1 <= positions <= 10` and
    /// `1 <= colors <= 10`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameSize;
    ///
    /// let size = GameSize::new(4, 6).unwrap();
    /// assert_eq!(size.space_size(), 1296);
    /// assert!(GameSize::new(11, 6).is_err());
    /// ```
    pub const fn new(positions: usize, colors: u8) -> Result<Self, CodeError> {
        if positions == 0 || positions > MAX_POSITIONS || colors == 0 || colors > MAX_COLORS {
            return Err(CodeError::InvalidSize { positions, colors });
        }
        Ok(Self { positions, colors })
    }

    /// Number of positions in every code
    #[inline]
    #[must_use]
    pub const fn positions(self) -> usize {
        self.positions
    }

    /// Number of colors in the alphabet
    #[inline]
    #[must_use]
    pub const fn colors(self) -> u8 {
        self.colors
    }

    /// Total number of codes, C^P
    #[must_use]
    pub fn space_size(self) -> u64 {
        u64::from(self.colors).pow(self.positions as u32)
    }

    /// Number of slots needed to index any feedback for this size
    ///
    /// Feedback `(exact, partial)` maps to `exact * (P + 1) + partial`.
    #[inline]
    #[must_use]
    pub const fn feedback_slots(self) -> usize {
        (self.positions + 1) * (self.positions + 1)
    }
}

impl Default for GameSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for GameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.positions, self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_size() {
        let size = GameSize::default();
        assert_eq!(size.positions(), 4);
        assert_eq!(size.colors(), 6);
        assert_eq!(size.space_size(), 1296);
        assert_eq!(size.to_string(), "4x6");
    }

    #[test]
    fn rejects_out_of_bounds() {
        assert!(GameSize::new(0, 6).is_err());
        assert!(GameSize::new(4, 0).is_err());
        assert!(GameSize::new(11, 6).is_err());
        assert!(GameSize::new(4, 11).is_err());
        assert!(GameSize::new(10, 10).is_ok());
    }

    #[test]
    fn space_size_at_upper_bound() {
        let size = GameSize::new(10, 10).unwrap();
        assert_eq!(size.space_size(), 10_000_000_000);
    }

    #[test]
    fn feedback_slots_cover_every_result() {
        let size = GameSize::new(5, 8).unwrap();
        assert_eq!(size.feedback_slots(), 36);
    }
}
