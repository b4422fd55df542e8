//! Minimax solver loop

use super::calculator::prune;
use super::selector::select_best_guess;
use crate::core::{Code, GameSize};
use crate::game::Oracle;
use crate::solver::{
    CodeSpace, Evaluator, HypothesisSet, OpeningBook, Round, SolveError, Strategy,
};
use std::sync::Arc;

/// Exact minimax code-breaker
///
/// Keeps the set of codes consistent with every feedback so far and always
/// guesses the code whose worst-case feedback leaves the fewest of them.
pub struct MinimaxSolver<O: Oracle> {
    game: O,
    space: CodeSpace,
    opening: Code,
    evaluator: Arc<Evaluator>,
    rounds: Vec<Round>,
}

impl<O: Oracle> MinimaxSolver<O> {
    /// Create a solver bound to `game`, resolving the opening from `book`
    ///
    /// Resets the game's turn counter.
    ///
    /// # Errors
    /// Returns `SolveError` if the opening cannot be computed.
    pub fn new(
        mut game: O,
        book: &OpeningBook,
        evaluator: Arc<Evaluator>,
    ) -> Result<Self, SolveError> {
        let size = game.size();
        let opening = book.opening(size, &evaluator)?;
        game.reset();

        Ok(Self {
            game,
            space: CodeSpace::enumerate(size),
            opening,
            evaluator,
            rounds: Vec::new(),
        })
    }

    /// The first guess this solver will make
    #[must_use]
    pub const fn opening(&self) -> &Code {
        &self.opening
    }

    /// The game being played
    pub const fn game(&self) -> &O {
        &self.game
    }

    fn size(&self) -> GameSize {
        self.space.size()
    }

    /// Choose the next guess from the remaining hypotheses
    ///
    /// With two or fewer left, guessing the smallest either wins or leaves a
    /// single certain answer.
    fn next_guess(&self, hypotheses: &HypothesisSet) -> Result<Code, SolveError> {
        let moves = self.rounds.len();

        if hypotheses.len() <= 2 {
            return hypotheses
                .first()
                .cloned()
                .ok_or(SolveError::NoCandidates { moves });
        }

        let (guess, worst) =
            select_best_guess(&self.evaluator, self.space.codes(), hypotheses, self.size())?
                .ok_or(SolveError::NoCandidates { moves })?;
        log::debug!("move {}: next guess {guess}, worst case {worst}", moves + 1);
        Ok(guess)
    }
}

impl<O: Oracle> Strategy for MinimaxSolver<O> {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn solve(&mut self) -> Result<Code, SolveError> {
        let size = self.size();
        let mut hypotheses = self.space.hypotheses();
        let mut guess = self.opening.clone();

        loop {
            let feedback = self.game.scored_guess(&guess)?;

            if self.game.is_win(feedback) {
                self.rounds.push(Round {
                    guess: guess.clone(),
                    feedback,
                    candidates: 1,
                });
                return Ok(guess);
            }

            let before = hypotheses.len();
            let hits = prune(&mut hypotheses, &guess, feedback, size)?;
            log::debug!(
                "move {}: {guess} scored {feedback}, hypotheses {before} -> {} (largest partition {})",
                self.rounds.len() + 1,
                hypotheses.len(),
                hits.max_hits().1
            );

            self.rounds.push(Round {
                guess,
                feedback,
                candidates: hypotheses.len(),
            });

            guess = self.next_guess(&hypotheses)?;
        }
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}
