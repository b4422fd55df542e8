//! Opening-book cache
//!
//! The best first guess depends only on the game size, and computing it means
//! scoring the whole space against itself. An [`OpeningBook`] computes each
//! size once and hands the cached move to every later solver.

use super::minimax::select_best_guess;
use super::{CodeSpace, Evaluator, SolveError};
use crate::core::{Code, GameSize};
use rustc_hash::FxHashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memoized first guesses keyed by game size
///
/// The map is guarded by a single mutex that stays held while a missing
/// opening is computed, so concurrent first use of a size computes it once and
/// every other caller waits for and reuses that result.
pub struct OpeningBook {
    moves: Mutex<FxHashMap<GameSize, Code>>,
    computations: AtomicUsize,
}

impl OpeningBook {
    /// A book pre-seeded with the known classic openings
    #[must_use]
    pub fn new() -> Self {
        let mut moves = FxHashMap::default();
        moves.insert(GameSize::CLASSIC, Code::from([0, 0, 1, 1]));
        if let Ok(size) = GameSize::new(5, 6) {
            moves.insert(size, Code::from([0, 0, 1, 2, 3]));
        }
        Self::with_moves(moves)
    }

    /// A book with nothing cached
    #[must_use]
    pub fn empty() -> Self {
        Self::with_moves(FxHashMap::default())
    }

    fn with_moves(moves: FxHashMap<GameSize, Code>) -> Self {
        Self {
            moves: Mutex::new(moves),
            computations: AtomicUsize::new(0),
        }
    }

    /// The opening for `size`, computing and caching it on first use
    ///
    /// # Errors
    /// Returns `SolveError::Poisoned` if a previous computation panicked, or
    /// any error raised while scoring the space.
    pub fn opening(&self, size: GameSize, evaluator: &Evaluator) -> Result<Code, SolveError> {
        let mut moves = self
            .moves
            .lock()
            .map_err(|_| SolveError::Poisoned("opening book"))?;

        if let Some(code) = moves.get(&size) {
            return Ok(code.clone());
        }

        log::info!("calculating initial move for size {size}");
        let space = CodeSpace::enumerate(size);
        let (guess, worst) =
            select_best_guess(evaluator, space.codes(), &space.hypotheses(), size)?
                .ok_or(SolveError::NoCandidates { moves: 0 })?;
        log::info!("game of size {size}, initial move: {guess} (worst case {worst})");

        self.computations.fetch_add(1, Ordering::SeqCst);
        moves.insert(size, guess.clone());
        Ok(guess)
    }

    /// The cached opening for `size`, without computing anything
    #[must_use]
    pub fn cached(&self, size: GameSize) -> Option<Code> {
        self.moves.lock().ok()?.get(&size).cloned()
    }

    /// How many openings this book has computed (cache misses)
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new()
    }
}
