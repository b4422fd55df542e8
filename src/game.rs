//! Game session and feedback oracle
//!
//! The solvers never see the secret. They talk to an [`Oracle`], which scores
//! guesses and counts turns. [`Game`] is the in-process implementation.

use crate::core::{Code, CodeError, Feedback, GameSize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// The collaborator contract a solver plays against
pub trait Oracle {
    /// Dimensions of the game
    fn size(&self) -> GameSize;

    /// Score a guess against the hidden secret
    ///
    /// Every call counts as a turn, including malformed guesses.
    ///
    /// # Errors
    /// Returns `CodeError` if the guess does not fit the game size.
    fn scored_guess(&mut self, guess: &Code) -> Result<Feedback, CodeError>;

    /// A uniformly random code of the right size
    fn random_code(&mut self) -> Code;

    /// Restart the turn counter and clock
    fn reset(&mut self);

    /// Number of positions in every code
    fn positions(&self) -> usize {
        self.size().positions()
    }

    /// Number of colors in the alphabet
    fn colors(&self) -> u8 {
        self.size().colors()
    }

    /// A code of the right length, all color 0
    fn empty_code(&self) -> Code {
        Code::empty(self.positions())
    }

    /// Check whether feedback means the secret was found
    fn is_win(&self, feedback: Feedback) -> bool {
        feedback.is_win(self.positions())
    }
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn size(&self) -> GameSize {
        (**self).size()
    }

    fn scored_guess(&mut self, guess: &Code) -> Result<Feedback, CodeError> {
        (**self).scored_guess(guess)
    }

    fn random_code(&mut self) -> Code {
        (**self).random_code()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// A single game with a hidden secret
pub struct Game {
    size: GameSize,
    secret: Code,
    turns_taken: usize,
    started: Instant,
    solve_time: Option<Duration>,
    rng: StdRng,
}

impl Game {
    /// Create a game with a random secret, seeded from the OS
    #[must_use]
    pub fn new(size: GameSize) -> Self {
        Self::with_rng(size, StdRng::from_os_rng())
    }

    /// Create a game whose secret and random codes come from `rng`
    #[must_use]
    pub fn with_rng(size: GameSize, mut rng: StdRng) -> Self {
        let secret = Code::random(size, &mut rng);
        Self::build(size, secret, rng)
    }

    /// Create a game with a known secret
    ///
    /// # Errors
    /// Returns `CodeError` if the secret does not fit the size.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, GameSize};
    /// use mastermind_solver::game::{Game, Oracle};
    ///
    /// let mut game = Game::with_secret(GameSize::CLASSIC, Code::from([5, 4, 3, 2])).unwrap();
    /// let feedback = game.guess_str("1234").unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// assert_eq!(game.turns_taken(), 1);
    /// ```
    pub fn with_secret(size: GameSize, secret: Code) -> Result<Self, CodeError> {
        secret.validate(size)?;
        Ok(Self::build(size, secret, StdRng::from_os_rng()))
    }

    fn build(size: GameSize, secret: Code, rng: StdRng) -> Self {
        Self {
            size,
            secret,
            turns_taken: 0,
            started: Instant::now(),
            solve_time: None,
            rng,
        }
    }

    /// Parse a canonical code string for this game's size
    ///
    /// # Errors
    /// Returns `CodeError` for malformed strings.
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        Code::parse(text, self.size)
    }

    /// Parse and score a guess in one step
    ///
    /// # Errors
    /// Returns `CodeError` for malformed strings.
    pub fn guess_str(&mut self, text: &str) -> Result<Feedback, CodeError> {
        let code = self.parse_code(text)?;
        self.scored_guess(&code)
    }

    /// Number of guesses scored since creation or the last reset
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    /// Time from start to the winning guess, if the game has been won
    #[must_use]
    pub const fn solve_time(&self) -> Option<Duration> {
        self.solve_time
    }

    /// Check a code against the secret directly
    #[must_use]
    pub fn is_winner(&self, code: &Code) -> bool {
        *code == self.secret
    }

    /// The hidden secret, for reporting once a game is over
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}

impl Oracle for Game {
    fn size(&self) -> GameSize {
        self.size
    }

    fn scored_guess(&mut self, guess: &Code) -> Result<Feedback, CodeError> {
        self.turns_taken += 1;
        if guess.len() != self.size.positions() {
            return Err(CodeError::LengthMismatch {
                expected: self.size.positions(),
                actual: guess.len(),
            });
        }

        let feedback = Feedback::check(guess, &self.secret, self.size.colors())?;

        if self.is_win(feedback) {
            let elapsed = self.started.elapsed();
            self.solve_time = Some(elapsed);
            log::debug!(
                "{guess} is a winner; solved in {} moves ({elapsed:?})",
                self.turns_taken
            );
        } else {
            log::trace!("move {}: {guess} scored {feedback}", self.turns_taken);
        }

        Ok(feedback)
    }

    fn random_code(&mut self) -> Code {
        Code::random(self.size, &mut self.rng)
    }

    fn reset(&mut self) {
        self.turns_taken = 0;
        self.started = Instant::now();
        self.solve_time = None;
    }
}

/// Draw `count` random secrets for a size
///
/// Used by the benchmark command and the stochastic tests.
pub fn random_secrets<R: Rng>(size: GameSize, count: usize, rng: &mut R) -> Vec<Code> {
    (0..count).map(|_| Code::random(size, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_game() -> Game {
        Game::with_secret(GameSize::CLASSIC, Code::from([5, 4, 3, 2])).unwrap()
    }

    #[test]
    fn guess_logic() {
        let mut game = classic_game();
        let cases = [
            ("1111", (0, 0)),
            ("1234", (1, 2)),
            ("1235", (1, 2)),
            ("4321", (0, 3)),
            ("5321", (1, 2)),
            ("5431", (3, 0)),
            ("5432", (4, 0)),
        ];

        for (guess, (exact, partial)) in cases {
            let feedback = game.guess_str(guess).unwrap();
            assert_eq!(feedback, Feedback::new(exact, partial), "guess {guess}");
        }
        assert_eq!(game.turns_taken(), 7);
    }

    #[test]
    fn win_records_solve_time() {
        let mut game = classic_game();
        assert!(game.solve_time().is_none());

        let feedback = game.guess_str("5432").unwrap();
        assert!(game.is_win(feedback));
        assert!(game.solve_time().is_some());
        assert!(game.is_winner(&Code::from([5, 4, 3, 2])));
    }

    #[test]
    fn wrong_length_counts_turn_and_fails() {
        let mut game = classic_game();
        let result = game.scored_guess(&Code::from([1, 2, 3]));
        assert!(matches!(result, Err(CodeError::LengthMismatch { .. })));
        assert_eq!(game.turns_taken(), 1);
    }

    #[test]
    fn reset_clears_turns() {
        let mut game = classic_game();
        game.guess_str("1111").unwrap();
        game.reset();
        assert_eq!(game.turns_taken(), 0);
    }

    #[test]
    fn invalid_secret_rejected() {
        assert!(Game::with_secret(GameSize::CLASSIC, Code::from([6, 0, 0, 0])).is_err());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = Game::with_rng(GameSize::CLASSIC, StdRng::seed_from_u64(3));
        let b = Game::with_rng(GameSize::CLASSIC, StdRng::seed_from_u64(3));
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn oracle_defaults() {
        let mut game = classic_game();
        assert_eq!(game.positions(), 4);
        assert_eq!(game.colors(), 6);
        assert_eq!(game.empty_code(), Code::from([0, 0, 0, 0]));
        assert!(game.random_code().validate(GameSize::CLASSIC).is_ok());
    }
}
