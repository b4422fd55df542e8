//! Benchmark command
//!
//! Tests solver performance across random secrets.

use super::solve::{GameOutcome, play_game, seeded_rng};
use crate::core::{Code, GameSize};
use crate::game::{Game, random_secrets};
use crate::solver::{SolverContext, StrategyKind};
use anyhow::Result;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub size: GameSize,
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses taken to solve, counted per game; failures are not included
    pub distribution: HashMap<usize, usize>,
    pub failures: Vec<Code>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Aggregate finished games into benchmark statistics
#[must_use]
pub fn summarize(
    strategy: &'static str,
    size: GameSize,
    outcomes: &[GameOutcome],
    duration: Duration,
) -> BenchmarkResult {
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        if !outcome.success() {
            failures.push(outcome.secret.clone());
            continue;
        }
        total_guesses += outcome.turns;
        min_guesses = min_guesses.min(outcome.turns);
        max_guesses = max_guesses.max(outcome.turns);
        *distribution.entry(outcome.turns).or_insert(0) += 1;
    }

    let solved = outcomes.len() - failures.len();

    BenchmarkResult {
        strategy,
        size,
        total_games: outcomes.len(),
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        games_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Play `count` games against random secrets
///
/// # Errors
/// Returns an error if a solver cannot be started.
pub fn run_benchmark(
    context: &SolverContext,
    kind: StrategyKind,
    size: GameSize,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult> {
    let mut rng = seeded_rng(seed, 0);
    let secrets = random_secrets(size, count, &mut rng);

    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(secrets.len());
    for secret in secrets {
        let mut game = Game::with_secret(size, secret)?;
        let solver_rng = seeded_rng(Some(rng.random::<u64>()), 1);
        let outcome = play_game(context, kind, &mut game, solver_rng)?;
        if let Err(e) = &outcome.result {
            log::warn!("failed to solve {}: {e}", outcome.secret);
        }
        outcomes.push(outcome);
    }

    Ok(summarize(kind.name(), size, &outcomes, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::{Round, SolveError};

    fn outcome(secret: [u8; 4], turns: usize, solved: bool) -> GameOutcome {
        let secret = Code::from(secret);
        GameOutcome {
            result: if solved {
                Ok(secret.clone())
            } else {
                Err(SolveError::Exhausted { moves: turns })
            },
            rounds: vec![
                Round {
                    guess: Code::from([0, 0, 1, 1]),
                    feedback: Feedback::new(0, 0),
                    candidates: 1,
                };
                turns
            ],
            secret,
            turns,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn benchmark_runs() {
        let context = SolverContext::new(4).unwrap();
        let result =
            run_benchmark(&context, StrategyKind::Minimax, GameSize::CLASSIC, 10, Some(3)).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 5);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let context = SolverContext::new(4).unwrap();
        let result =
            run_benchmark(&context, StrategyKind::Genetic, GameSize::CLASSIC, 8, Some(5)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_games);
    }

    #[test]
    fn summary_excludes_failures() {
        let outcomes = [
            outcome([1, 2, 3, 4], 4, true),
            outcome([2, 2, 2, 2], 9, false),
            outcome([5, 5, 1, 1], 6, true),
        ];
        let result = summarize("genetic", GameSize::CLASSIC, &outcomes, Duration::from_secs(1));

        assert_eq!(result.solved, 2);
        assert_eq!(result.failures, vec![Code::from([2, 2, 2, 2])]);
        assert_eq!(result.total_guesses, 10);
        assert!((result.average_guesses - 5.0).abs() < f64::EPSILON);
        assert_eq!((result.min_guesses, result.max_guesses), (4, 6));
    }

    #[test]
    fn benchmark_empty() {
        let result = summarize("minimax", GameSize::CLASSIC, &[], Duration::ZERO);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
