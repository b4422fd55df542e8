//! Minimax worst-case calculation
//!
//! Given a guess and the remaining hypotheses, partitions the hypotheses by
//! the feedback each would produce and reports the largest partition.

use crate::core::{Code, CodeError, Feedback, GameSize};
use crate::solver::HypothesisSet;

/// Count of hypotheses per feedback value for one guess
///
/// Every feedback value of the game size has a slot, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitMap {
    size: GameSize,
    counts: Vec<usize>,
}

impl HitMap {
    /// An empty map with a zero count for every possible feedback
    #[must_use]
    pub fn new(size: GameSize) -> Self {
        Self {
            size,
            counts: vec![0; size.feedback_slots()],
        }
    }

    /// Tally one hypothesis under `feedback`
    #[inline]
    pub fn record(&mut self, feedback: Feedback) {
        self.counts[feedback.slot(self.size)] += 1;
    }

    /// Number of hypotheses that produced `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.counts[feedback.slot(self.size)]
    }

    /// Total number of hypotheses tallied
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The largest partition and its feedback
    ///
    /// Ties go to the first feedback in slot order. An empty map reports
    /// `(0-0, 0)`.
    #[must_use]
    pub fn max_hits(&self) -> (Feedback, usize) {
        self.counts
            .iter()
            .enumerate()
            .fold((Feedback::default(), 0), |best, (slot, &count)| {
                if count > best.1 {
                    (Feedback::from_slot(slot, self.size), count)
                } else {
                    best
                }
            })
    }

    /// Non-empty partitions in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(slot, &count)| (Feedback::from_slot(slot, self.size), count))
    }
}

/// Partition `hypotheses` by the feedback `guess` would receive from each
///
/// # Errors
/// Returns `CodeError` if any code does not fit `size`.
pub fn count_hits(guess: &Code, hypotheses: &[Code], size: GameSize) -> Result<HitMap, CodeError> {
    let mut hits = HitMap::new(size);
    for hypothesis in hypotheses {
        hits.record(Feedback::check(guess, hypothesis, size.colors())?);
    }
    Ok(hits)
}

/// Calculate the worst-case number of hypotheses left after `guess`
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameSize};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let size = GameSize::CLASSIC;
/// let hypotheses = vec![Code::from([0, 0, 0, 0]), Code::from([1, 1, 1, 1])];
///
/// // guessing one of them splits the pair
/// let max = calculate_max_remaining(&Code::from([0, 0, 0, 0]), &hypotheses, size).unwrap();
/// assert_eq!(max, 1);
/// ```
///
/// # Errors
/// Returns `CodeError` if any code does not fit `size`.
pub fn calculate_max_remaining(
    guess: &Code,
    hypotheses: &[Code],
    size: GameSize,
) -> Result<usize, CodeError> {
    if hypotheses.is_empty() {
        return Ok(0);
    }
    Ok(count_hits(guess, hypotheses, size)?.max_hits().1)
}

/// Remove every hypothesis whose feedback against `guess` differs from `observed`
///
/// Returns the hit map of the hypotheses as they were before pruning.
///
/// # Errors
/// Returns `CodeError` if any code does not fit `size`; the set is left
/// partially pruned in that case.
pub fn prune(
    hypotheses: &mut HypothesisSet,
    guess: &Code,
    observed: Feedback,
    size: GameSize,
) -> Result<HitMap, CodeError> {
    let mut hits = HitMap::new(size);
    let mut failure = None;

    hypotheses.retain(|hypothesis| match Feedback::check(hypothesis, guess, size.colors()) {
        Ok(feedback) => {
            hits.record(feedback);
            feedback == observed
        }
        Err(err) => {
            failure.get_or_insert(err);
            false
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(hits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::CodeSpace;

    fn code(text: &str) -> Code {
        Code::parse(text, GameSize::CLASSIC).unwrap()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let hypotheses = [code("0000"), code("1111")];
        let max = calculate_max_remaining(&code("0000"), &hypotheses, GameSize::CLASSIC).unwrap();
        assert_eq!(max, 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        // none of these share a color with the guess
        let hypotheses = [code("0000"), code("1111"), code("2222")];
        let max = calculate_max_remaining(&code("5555"), &hypotheses, GameSize::CLASSIC).unwrap();
        assert_eq!(max, 3);
    }

    #[test]
    fn max_remaining_empty_hypotheses() {
        let max = calculate_max_remaining(&code("0011"), &[], GameSize::CLASSIC).unwrap();
        assert_eq!(max, 0);
    }

    #[test]
    fn knuth_opening_worst_case() {
        let space = CodeSpace::enumerate(GameSize::CLASSIC);
        let size = GameSize::CLASSIC;

        assert_eq!(calculate_max_remaining(&code("0011"), space.codes(), size).unwrap(), 256);
        assert_eq!(calculate_max_remaining(&code("0012"), space.codes(), size).unwrap(), 276);
        assert_eq!(calculate_max_remaining(&code("0123"), space.codes(), size).unwrap(), 312);
        assert_eq!(calculate_max_remaining(&code("0000"), space.codes(), size).unwrap(), 625);
    }

    #[test]
    fn hit_map_covers_every_hypothesis() {
        let space = CodeSpace::enumerate(GameSize::CLASSIC);
        let hits = count_hits(&code("0011"), space.codes(), GameSize::CLASSIC).unwrap();

        assert_eq!(hits.total(), 1296);
        assert_eq!(hits.count(Feedback::new(4, 0)), 1);
        assert_eq!(hits.count(Feedback::new(3, 1)), 0);
        assert_eq!(hits.iter().map(|(_, count)| count).sum::<usize>(), 1296);
        assert_eq!(hits.max_hits(), (Feedback::new(0, 0), 256));
    }

    #[test]
    fn prune_keeps_only_consistent_codes() {
        let space = CodeSpace::enumerate(GameSize::CLASSIC);
        let mut hypotheses = space.hypotheses();
        let secret = code("5432");
        let guess = code("0011");
        let observed = Feedback::check(&guess, &secret, 6).unwrap();

        let hits = prune(&mut hypotheses, &guess, observed, GameSize::CLASSIC).unwrap();

        assert_eq!(hits.total(), 1296);
        assert_eq!(hypotheses.len(), hits.count(observed));
        assert!(hypotheses.contains(&secret));
        for hypothesis in &hypotheses {
            assert_eq!(Feedback::check(&guess, hypothesis, 6).unwrap(), observed);
        }
    }

    #[test]
    fn prune_reports_malformed_guess() {
        let mut hypotheses = CodeSpace::enumerate(GameSize::CLASSIC).hypotheses();
        let result = prune(
            &mut hypotheses,
            &Code::from([0, 0, 1]),
            Feedback::new(0, 0),
            GameSize::CLASSIC,
        );
        assert!(matches!(result, Err(CodeError::LengthMismatch { .. })));
    }
}
