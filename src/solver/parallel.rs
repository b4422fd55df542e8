//! Bounded parallel evaluation
//!
//! Both strategies score many independent candidates per round. The
//! [`Evaluator`] fans that work out over a dedicated rayon pool whose size is
//! capped by a concurrency ceiling, and folds every result into a single
//! accumulator behind a mutex.

use super::SolveError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Default maximum number of units evaluated at once
pub const DEFAULT_CEILING: usize = 100;

/// Bounded-concurrency fan-out/fan-in
///
/// Fail-fast: the first unit that returns an error stops further scheduling
/// and that error is returned from [`Evaluator::run`]. Units already running
/// finish, but their results are discarded with the accumulator.
pub struct Evaluator {
    pool: ThreadPool,
    ceiling: usize,
}

impl Evaluator {
    /// Build an evaluator running at most `ceiling` units concurrently
    ///
    /// The pool never has more workers than the machine has hardware threads.
    ///
    /// # Errors
    /// Returns `SolveError::Evaluator` if the thread pool cannot be created.
    pub fn new(ceiling: usize) -> Result<Self, SolveError> {
        let ceiling = ceiling.max(1);
        let workers = std::thread::available_parallelism()
            .map_or(1, NonZeroUsize::get)
            .min(ceiling);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("evaluator-{index}"))
            .build()?;

        log::debug!("evaluator pool started with {workers} workers (ceiling {ceiling})");
        Ok(Self { pool, ceiling })
    }

    /// Build an evaluator with [`DEFAULT_CEILING`]
    ///
    /// # Errors
    /// Returns `SolveError::Evaluator` if the thread pool cannot be created.
    pub fn with_default_ceiling() -> Result<Self, SolveError> {
        Self::new(DEFAULT_CEILING)
    }

    /// Configured concurrency ceiling
    #[must_use]
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Number of worker threads actually running
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `work` once per item and fold each result into `accumulator`
    ///
    /// `merge` runs under the accumulator lock, so only one worker writes at a
    /// time. Completion order is unspecified.
    ///
    /// # Errors
    /// Returns the first error produced by `work`, or `SolveError::Poisoned`
    /// if a worker panicked inside `merge`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::Evaluator;
    ///
    /// let evaluator = Evaluator::new(4).unwrap();
    /// let items: Vec<u64> = (1..=100).collect();
    /// let total = evaluator
    ///     .run(&items, 0u64, |&n| Ok(n * 2), |sum, _, doubled| *sum += doubled)
    ///     .unwrap();
    /// assert_eq!(total, 10_100);
    /// ```
    pub fn run<T, R, A, W, M>(
        &self,
        items: &[T],
        accumulator: A,
        work: W,
        merge: M,
    ) -> Result<A, SolveError>
    where
        T: Sync,
        R: Send,
        A: Send,
        W: Fn(&T) -> Result<R, SolveError> + Sync,
        M: Fn(&mut A, &T, R) + Sync,
    {
        let shared = Mutex::new(accumulator);

        self.pool.install(|| {
            items.par_iter().try_for_each(|item| -> Result<(), SolveError> {
                let result = work(item)?;
                let mut guard = shared
                    .lock()
                    .map_err(|_| SolveError::Poisoned("accumulator"))?;
                merge(&mut guard, item, result);
                Ok(())
            })
        })?;

        shared
            .into_inner()
            .map_err(|_| SolveError::Poisoned("accumulator"))
    }
}
