//! Mastermind code representation
//!
//! A Code is an ordered sequence of color indices. Its canonical string form
//! writes one decimal digit per position, so `[0, 0, 1, 1]` is `"0011"`.

use super::GameSize;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Error type for malformed codes and sizes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("code must have {expected} positions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("color {color} is outside the alphabet of {colors} colors")]
    ColorOutOfRange { color: u8, colors: u8 },
    #[error("unsupported game size {positions}x{colors} (positions and colors must be 1-10)")]
    InvalidSize { positions: usize, colors: u8 },
    #[error("code may only contain digits, got {0:?}")]
    InvalidCharacter(char),
}

/// An ordered sequence of color indices
///
/// The derived ordering compares colors position by position, which matches
/// the lexicographic order of the canonical strings since every color is a
/// single digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

impl Code {
    /// Create a code from raw colors
    ///
    /// No bounds are checked here; use [`Code::validate`] against a size.
    #[must_use]
    pub const fn new(colors: Vec<u8>) -> Self {
        Self(colors)
    }

    /// A code of the given length filled with color 0
    #[must_use]
    pub fn empty(positions: usize) -> Self {
        Self(vec![0; positions])
    }

    /// A uniformly random code for the given size
    pub fn random<R: Rng>(size: GameSize, rng: &mut R) -> Self {
        Self(
            (0..size.positions())
                .map(|_| rng.random_range(0..size.colors()))
                .collect(),
        )
    }

    /// Parse a canonical string such as `"5432"`
    ///
    /// # Errors
    /// Returns `CodeError` if the string has the wrong length, contains a
    /// non-digit, or uses a color outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameSize};
    ///
    /// let code = Code::parse("5432", GameSize::CLASSIC).unwrap();
    /// assert_eq!(code.colors(), &[5, 4, 3, 2]);
    /// assert!(Code::parse("5436", GameSize::CLASSIC).is_err());
    /// ```
    pub fn parse(text: &str, size: GameSize) -> Result<Self, CodeError> {
        let colors = text
            .trim()
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or(CodeError::InvalidCharacter(ch))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let code = Self(colors);
        code.validate(size)?;
        Ok(code)
    }

    /// Check the length and every color against a game size
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `ColorOutOfRange`.
    pub fn validate(&self, size: GameSize) -> Result<(), CodeError> {
        if self.len() != size.positions() {
            return Err(CodeError::LengthMismatch {
                expected: size.positions(),
                actual: self.len(),
            });
        }
        match self.0.iter().find(|&&color| color >= size.colors()) {
            Some(&color) => Err(CodeError::ColorOutOfRange {
                color,
                colors: size.colors(),
            }),
            None => Ok(()),
        }
    }

    /// The colors as a slice
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.0
    }

    /// Mutable access for the genetic operators, which only ever hold owned copies
    #[inline]
    pub(crate) fn colors_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Code {
    fn from(colors: Vec<u8>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[u8; N]> for Code {
    fn from(colors: [u8; N]) -> Self {
        Self(colors.to_vec())
    }
}
