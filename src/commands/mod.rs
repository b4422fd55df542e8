//! Command implementations

pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{GameOutcome, SolveConfig, SolveResult, play_game, seeded_rng, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
