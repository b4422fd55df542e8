//! Mastermind solving algorithms
//!
//! Two strategies share the code space, the bounded evaluator and the
//! opening book: exact minimax and a genetic search.

mod error;
pub mod genetic;
pub mod minimax;
mod opening;
mod parallel;
mod space;
pub mod strategy;

pub use error::SolveError;
pub use genetic::{GeneticConfig, GeneticSolver};
pub use minimax::MinimaxSolver;
pub use opening::OpeningBook;
pub use parallel::{DEFAULT_CEILING, Evaluator};
pub use space::{CodeSpace, HypothesisSet};
pub use strategy::{Round, SolverContext, Strategy, StrategyKind, StrategyType};
