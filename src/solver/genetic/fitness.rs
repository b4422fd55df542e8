//! Consistency scoring against the game history
//!
//! A candidate is scored by how far the feedback it would have produced for
//! every earlier guess is from the feedback actually observed. Lower is
//! better; a fully consistent candidate carries only the move penalty.

use crate::core::{Code, CodeError, Feedback, GameSize};
use crate::solver::Round;

/// Weights applied to the fitness terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessWeights {
    /// Weight of the exact-match error
    pub a: f64,
    /// Weight of the per-move penalty
    pub b: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self { a: 2.0, b: 2.0 }
    }
}

impl FitnessWeights {
    /// Penalty added once `move_number` guesses have been scored
    #[must_use]
    pub fn move_penalty(&self, move_number: usize, size: GameSize) -> f64 {
        self.b * size.positions() as f64 * move_number.saturating_sub(1) as f64
    }

    /// Score `candidate` against every round played so far
    ///
    /// # Errors
    /// Returns `CodeError` if the candidate or a past guess does not fit `size`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, GameSize};
    /// use mastermind_solver::solver::Round;
    /// use mastermind_solver::solver::genetic::FitnessWeights;
    ///
    /// let size = GameSize::CLASSIC;
    /// let history = [Round {
    ///     guess: Code::from([0, 0, 1, 2]),
    ///     feedback: Feedback::new(1, 1),
    ///     candidates: 0,
    /// }];
    /// let weights = FitnessWeights::default();
    ///
    /// // 0345 against 0012 gives one exact and no partial: off by one partial
    /// let f = weights.fitness(&Code::from([0, 3, 4, 5]), &history, 1, size).unwrap();
    /// assert!((f - 1.0).abs() < 1e-9);
    /// ```
    pub fn fitness(
        &self,
        candidate: &Code,
        history: &[Round],
        move_number: usize,
        size: GameSize,
    ) -> Result<f64, CodeError> {
        let mut exact_error = 0u32;
        let mut partial_error = 0u32;

        for round in history {
            let hypothetical = Feedback::check(candidate, &round.guess, size.colors())?;
            exact_error += u32::from(hypothetical.exact().abs_diff(round.feedback.exact()));
            partial_error += u32::from(hypothetical.partial().abs_diff(round.feedback.partial()));
        }

        Ok(self.a * f64::from(exact_error)
            + f64::from(partial_error)
            + self.move_penalty(move_number, size))
    }

    /// Whether a fitness computed at `move_number` passes `threshold`
    ///
    /// The move penalty is removed first, so a threshold of zero admits
    /// exactly the candidates consistent with the whole history.
    #[must_use]
    pub fn is_eligible(
        &self,
        fitness: f64,
        move_number: usize,
        size: GameSize,
        threshold: f64,
    ) -> bool {
        fitness - self.move_penalty(move_number, size) <= threshold
    }
}
