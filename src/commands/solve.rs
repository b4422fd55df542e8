//! Code solving command
//!
//! Plays one game against a given or random secret and returns the rounds.

use crate::core::{Code, GameSize};
use crate::game::Game;
use crate::solver::{Round, SolveError, SolverContext, Strategy, StrategyKind};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Seeded generator for one purpose, or an OS-seeded one without a seed
///
/// `stream` separates the secret generator from the solver's own so the same
/// seed gives both independent sequences.
#[must_use]
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed.wrapping_add(stream))
    })
}

/// Configuration for solving one code
pub struct SolveConfig {
    pub size: GameSize,
    pub strategy: StrategyKind,
    /// Secret to break; random when absent
    pub secret: Option<String>,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(size: GameSize, strategy: StrategyKind) -> Self {
        Self {
            size,
            strategy,
            secret: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// How a single game ended
pub struct GameOutcome {
    pub secret: Code,
    /// The code the solver settled on, or why it stopped
    pub result: Result<Code, SolveError>,
    pub rounds: Vec<Round>,
    pub turns: usize,
    pub duration: Duration,
}

impl GameOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(&self.result, Ok(code) if *code == self.secret)
    }
}

/// Result of the solve command
pub struct SolveResult {
    pub strategy: &'static str,
    pub size: GameSize,
    pub outcome: GameOutcome,
}

/// Play `game` to the end with a freshly built solver
///
/// Solver failures end up in the outcome; only a failure to build the
/// solver is an error.
///
/// # Errors
/// Returns an error if the strategy cannot be built, for example when the
/// opening for a new size cannot be computed.
pub fn play_game(
    context: &SolverContext,
    kind: StrategyKind,
    game: &mut Game,
    rng: StdRng,
) -> Result<GameOutcome> {
    let secret = game.secret().clone();
    let start = Instant::now();

    let mut solver = context
        .build(kind, &mut *game, rng)
        .with_context(|| format!("failed to start {} solver", kind.name()))?;
    let result = solver.solve();
    let rounds = solver.rounds().to_vec();
    drop(solver);

    Ok(GameOutcome {
        secret,
        result,
        rounds,
        turns: game.turns_taken(),
        duration: start.elapsed(),
    })
}

/// Solve one code using the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the game size
/// - The solver cannot be started
pub fn solve_code(config: SolveConfig, context: &SolverContext) -> Result<SolveResult> {
    let mut game = match &config.secret {
        Some(text) => {
            let secret = Code::parse(text, config.size)
                .with_context(|| format!("invalid secret {text:?} for size {}", config.size))?;
            Game::with_secret(config.size, secret)?
        }
        None => Game::with_rng(config.size, seeded_rng(config.seed, 0)),
    };

    let outcome = play_game(
        context,
        config.strategy,
        &mut game,
        seeded_rng(config.seed, 1),
    )?;

    Ok(SolveResult {
        strategy: config.strategy.name(),
        size: config.size,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SolverContext {
        SolverContext::new(4).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new(GameSize::CLASSIC, StrategyKind::Minimax).with_secret("5432");
        let result = solve_code(config, &context()).unwrap();

        assert!(result.outcome.success());
        assert_eq!(result.strategy, "minimax");
        assert_eq!(result.outcome.turns, result.outcome.rounds.len());
        assert!(result.outcome.turns <= 5);
    }

    #[test]
    fn solve_records_rounds() {
        let config = SolveConfig::new(GameSize::CLASSIC, StrategyKind::Minimax).with_secret("2150");
        let result = solve_code(config, &context()).unwrap();

        let rounds = &result.outcome.rounds;
        assert_eq!(rounds[0].guess, Code::from([0, 0, 1, 1]));
        assert_eq!(rounds.last().map(|r| r.guess.to_string()), Some("2150".into()));
        for pair in rounds.windows(2) {
            assert!(pair[1].candidates <= pair[0].candidates);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new(GameSize::CLASSIC, StrategyKind::Minimax).with_secret("5439");
        assert!(solve_code(config, &context()).is_err());

        let config = SolveConfig::new(GameSize::CLASSIC, StrategyKind::Minimax).with_secret("543");
        assert!(solve_code(config, &context()).is_err());
    }

    #[test]
    fn seeded_random_secret_is_reproducible() {
        let context = context();
        let run = || {
            let config = SolveConfig::new(GameSize::CLASSIC, StrategyKind::Genetic).with_seed(17);
            let result = solve_code(config, &context).unwrap();
            (result.outcome.secret, result.outcome.rounds)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn outcome_success_requires_secret() {
        let outcome = GameOutcome {
            secret: Code::from([1, 2]),
            result: Ok(Code::from([2, 1])),
            rounds: Vec::new(),
            turns: 0,
            duration: Duration::ZERO,
        };
        assert!(!outcome.success());
    }
}
