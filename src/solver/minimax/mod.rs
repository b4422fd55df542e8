//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization over the remaining hypotheses.

mod calculator;
mod engine;
mod selector;

pub use calculator::{HitMap, calculate_max_remaining, count_hits, prune};
pub use engine::MinimaxSolver;
pub use selector::{
    ScoreGroups, best_group, best_guess_of_set, prefer_hypotheses, score_candidates,
    select_best_guess,
};
