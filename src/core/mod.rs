//! Core domain types for Mastermind
//!
//! Codes, feedback and game dimensions. Everything here is a pure value type
//! with no knowledge of solving strategies.

mod code;
mod feedback;
mod size;

pub use code::{Code, CodeError};
pub use feedback::Feedback;
pub use size::{GameSize, MAX_COLORS, MAX_POSITIONS};
