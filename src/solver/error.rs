//! Solver failures

use crate::core::CodeError;
use thiserror::Error;

/// Why a solve attempt stopped without finding the secret
#[derive(Error, Debug)]
pub enum SolveError {
    /// A code or size was malformed, or the oracle rejected a guess
    #[error(transparent)]
    Code(#[from] CodeError),

    /// The genetic solver used up its move budget
    #[error("no solution found in {moves} moves")]
    Exhausted { moves: usize },

    /// Every hypothesis was eliminated; the oracle's feedback was inconsistent
    #[error("no candidate codes remain after {moves} moves")]
    NoCandidates { moves: usize },

    /// The worker pool could not be started
    #[error("failed to start evaluator pool: {0}")]
    Evaluator(#[from] rayon::ThreadPoolBuildError),

    /// A worker panicked while holding a shared lock
    #[error("{0} lock poisoned by a panicked worker")]
    Poisoned(&'static str),
}
