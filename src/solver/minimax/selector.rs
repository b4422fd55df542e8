//! Minimax-based guess selection
//!
//! Scores every candidate by its worst-case partition of the hypotheses,
//! narrows to the best-scoring group, prefers candidates that could still be
//! the secret, and breaks remaining ties by lexicographic order.

use super::calculator::calculate_max_remaining;
use crate::core::{Code, CodeError, GameSize};
use crate::solver::{Evaluator, HypothesisSet, SolveError};
use rustc_hash::FxHashMap;

/// Candidates grouped by their worst-case remaining count
pub type ScoreGroups = FxHashMap<usize, Vec<Code>>;

/// Score every candidate against the hypotheses in parallel
///
/// # Errors
/// Returns the first scoring failure from the evaluator.
pub fn score_candidates(
    evaluator: &Evaluator,
    candidates: &[Code],
    hypotheses: &[Code],
    size: GameSize,
) -> Result<ScoreGroups, SolveError> {
    evaluator.run(
        candidates,
        ScoreGroups::default(),
        |candidate| Ok(calculate_max_remaining(candidate, hypotheses, size)?),
        |groups, candidate, score| groups.entry(score).or_default().push(candidate.clone()),
    )
}

/// The group with the minimum worst-case score
#[must_use]
pub fn best_group(groups: ScoreGroups) -> Option<(usize, Vec<Code>)> {
    groups.into_iter().min_by_key(|(score, _)| *score)
}

/// Candidates that are themselves hypotheses, or all of them if none are
///
/// Guessing a code that may be the secret can win outright.
#[must_use]
pub fn prefer_hypotheses(group: Vec<Code>, hypotheses: &HypothesisSet) -> Vec<Code> {
    let (inside, outside): (Vec<Code>, Vec<Code>) = group
        .into_iter()
        .partition(|candidate| hypotheses.contains(candidate));

    if inside.is_empty() { outside } else { inside }
}

/// Sequentially re-score `candidates` and pick the best one
///
/// Returns the candidate with the smallest worst case, the lexicographically
/// smallest among equals, or `None` for an empty candidate list.
///
/// # Errors
/// Returns `CodeError` if any code does not fit `size`.
pub fn best_guess_of_set(
    candidates: &[Code],
    hypotheses: &[Code],
    size: GameSize,
) -> Result<Option<(Code, usize)>, CodeError> {
    let mut best: Option<(&Code, usize)> = None;

    for candidate in candidates {
        let score = calculate_max_remaining(candidate, hypotheses, size)?;
        let better = match best {
            None => true,
            Some((code, best_score)) => (score, candidate) < (best_score, code),
        };
        if better {
            best = Some((candidate, score));
        }
    }

    Ok(best.map(|(code, score)| (code.clone(), score)))
}

/// Select the minimax guess from the full candidate set
///
/// Returns the chosen guess and its worst-case remaining count, or `None` if
/// there are no candidates.
///
/// # Errors
/// Returns the first scoring failure.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameSize};
/// use mastermind_solver::solver::minimax::select_best_guess;
/// use mastermind_solver::solver::{CodeSpace, Evaluator};
///
/// let size = GameSize::new(3, 3).unwrap();
/// let space = CodeSpace::enumerate(size);
/// let evaluator = Evaluator::new(4).unwrap();
///
/// let (guess, worst) = select_best_guess(&evaluator, space.codes(), &space.hypotheses(), size)
///     .unwrap()
///     .unwrap();
/// assert!(worst < space.len());
/// assert!(space.hypotheses().contains(&guess));
/// ```
pub fn select_best_guess(
    evaluator: &Evaluator,
    candidates: &[Code],
    hypotheses: &HypothesisSet,
    size: GameSize,
) -> Result<Option<(Code, usize)>, SolveError> {
    let groups = score_candidates(evaluator, candidates, hypotheses.as_slice(), size)?;

    let Some((score, group)) = best_group(groups) else {
        return Ok(None);
    };
    log::debug!(
        "{} candidates share the best worst case of {score} (of {} hypotheses)",
        group.len(),
        hypotheses.len()
    );

    let potential = prefer_hypotheses(group, hypotheses);
    Ok(best_guess_of_set(&potential, hypotheses.as_slice(), size)?)
}
