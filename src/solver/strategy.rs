//! Solving strategies
//!
//! Defines the Strategy trait, the per-round trace every solver keeps, and
//! runtime selection between the minimax and genetic solvers.

use super::{Evaluator, GeneticConfig, GeneticSolver, MinimaxSolver, OpeningBook, SolveError};
use crate::core::{Code, Feedback};
use crate::game::Oracle;
use rand::rngs::StdRng;
use std::sync::Arc;

/// One scored guess and how many candidates it left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub feedback: Feedback,
    /// Minimax: hypotheses left after pruning. Genetic: eligible codes found
    /// for the next guess. 1 on the winning round.
    pub candidates: usize,
}

/// A solver that plays one game to completion
pub trait Strategy {
    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;

    /// Play until the oracle reports a win
    ///
    /// # Errors
    /// Returns `SolveError` when the oracle rejects a guess or the strategy
    /// gives up.
    fn solve(&mut self) -> Result<Code, SolveError>;

    /// Every round played so far
    fn rounds(&self) -> &[Round];
}

/// Which strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Exact minimax over the hypothesis set (default)
    #[default]
    Minimax,
    /// Genetic search for consistent codes
    Genetic,
}

impl StrategyKind {
    /// Look up a strategy by name
    ///
    /// Supported names: "minimax" (or "knuth"), "genetic" (or "ga").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "minimax" | "knuth" => Some(Self::Minimax),
            "genetic" | "ga" => Some(Self::Genetic),
            _ => None,
        }
    }

    /// Name accepted by [`StrategyKind::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Genetic => "genetic",
        }
    }
}

/// Shared, long-lived pieces every solver is built from
pub struct SolverContext {
    pub book: OpeningBook,
    pub evaluator: Arc<Evaluator>,
    pub genetic: GeneticConfig,
}

impl SolverContext {
    /// A context with a seeded opening book and default genetic settings
    ///
    /// # Errors
    /// Returns `SolveError::Evaluator` if the worker pool cannot start.
    pub fn new(ceiling: usize) -> Result<Self, SolveError> {
        Ok(Self {
            book: OpeningBook::new(),
            evaluator: Arc::new(Evaluator::new(ceiling)?),
            genetic: GeneticConfig::default(),
        })
    }

    /// Build a solver of `kind` bound to `game`
    ///
    /// `rng` drives the genetic solver and is ignored by minimax.
    ///
    /// # Errors
    /// Returns `SolveError` if the minimax opening cannot be resolved.
    pub fn build<O: Oracle>(
        &self,
        kind: StrategyKind,
        game: O,
        rng: StdRng,
    ) -> Result<StrategyType<O>, SolveError> {
        Ok(match kind {
            StrategyKind::Minimax => StrategyType::Minimax(MinimaxSolver::new(
                game,
                &self.book,
                Arc::clone(&self.evaluator),
            )?),
            StrategyKind::Genetic => StrategyType::Genetic(GeneticSolver::new(
                game,
                self.genetic.clone(),
                rng,
                Arc::clone(&self.evaluator),
            )),
        })
    }
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<O: Oracle> {
    Minimax(MinimaxSolver<O>),
    Genetic(GeneticSolver<O, StdRng>),
}

impl<O: Oracle> Strategy for StrategyType<O> {
    fn name(&self) -> &'static str {
        match self {
            Self::Minimax(s) => s.name(),
            Self::Genetic(s) => s.name(),
        }
    }

    fn solve(&mut self) -> Result<Code, SolveError> {
        match self {
            Self::Minimax(s) => s.solve(),
            Self::Genetic(s) => s.solve(),
        }
    }

    fn rounds(&self) -> &[Round] {
        match self {
            Self::Minimax(s) => s.rounds(),
            Self::Genetic(s) => s.rounds(),
        }
    }
}
