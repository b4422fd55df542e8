//! Reproduction operators
//!
//! Every operator works on an owned copy of its input, so parents already in
//! a population are never modified.

use crate::core::{Code, GameSize};
use rand::Rng;

/// Retry bound for finding two positions with different colors
const PERMUTE_ATTEMPTS: usize = 10;

/// Probability of each reproduction step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorRates {
    /// Chance of single-point rather than two-point crossover
    pub single_point: f64,
    pub mutation: f64,
    pub permutation: f64,
    pub inversion: f64,
}

impl Default for OperatorRates {
    fn default() -> Self {
        Self {
            single_point: 0.5,
            mutation: 0.03,
            permutation: 0.03,
            inversion: 0.02,
        }
    }
}

/// Two distinct positions below `positions`, which must be at least 2
fn distinct_pair<R: Rng>(positions: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.random_range(0..positions);
    let mut second = rng.random_range(0..positions - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

/// Copy the first half of `second` over `first`
#[must_use]
pub fn single_point(first: &Code, second: &Code) -> Code {
    let mut child = first.clone();
    let point = child.len() / 2;
    child.colors_mut()[..point].copy_from_slice(&second.colors()[..point]);
    child
}

/// Copy the middle third of `second` over `first`
#[must_use]
pub fn two_point(first: &Code, second: &Code) -> Code {
    let mut child = first.clone();
    let len = child.len();
    let (start, end) = (len / 3, len - len / 3);
    child.colors_mut()[start..end].copy_from_slice(&second.colors()[start..end]);
    child
}

/// Single-point crossover with probability `single_point_rate`, two-point otherwise
pub fn crossover<R: Rng>(first: &Code, second: &Code, single_point_rate: f64, rng: &mut R) -> Code {
    if rng.random::<f64>() < single_point_rate {
        single_point(first, second)
    } else {
        two_point(first, second)
    }
}

/// Give one random position a different random color
pub fn mutate<R: Rng>(code: &mut Code, size: GameSize, rng: &mut R) {
    if size.colors() < 2 || code.is_empty() {
        return;
    }

    let position = rng.random_range(0..code.len());
    let old = code.colors()[position];
    let mut color = old;
    while color == old {
        color = rng.random_range(0..size.colors());
    }
    code.colors_mut()[position] = color;
}

/// Swap two positions holding different colors
///
/// Gives up quietly after a bounded number of draws, for example when every
/// position holds the same color.
pub fn permute<R: Rng>(code: &mut Code, rng: &mut R) {
    if code.len() < 2 {
        return;
    }

    for _ in 0..PERMUTE_ATTEMPTS {
        let (i, j) = distinct_pair(code.len(), rng);
        let colors = code.colors_mut();
        if colors[i] != colors[j] {
            colors.swap(i, j);
            return;
        }
    }
}

/// Reverse the colors between two random positions, inclusive
pub fn invert<R: Rng>(code: &mut Code, rng: &mut R) {
    if code.len() < 2 {
        return;
    }

    let (i, j) = distinct_pair(code.len(), rng);
    let (low, high) = if i < j { (i, j) } else { (j, i) };
    code.colors_mut()[low..=high].reverse();
}

/// Produce one child of `first` and `second`
///
/// Crossover always happens; mutation, permutation and inversion each fire
/// with their own probability.
pub fn spawn<R: Rng>(
    first: &Code,
    second: &Code,
    rates: &OperatorRates,
    size: GameSize,
    rng: &mut R,
) -> Code {
    let mut child = crossover(first, second, rates.single_point, rng);

    if rng.random::<f64>() < rates.mutation {
        mutate(&mut child, size, rng);
    }
    if rng.random::<f64>() < rates.permutation {
        permute(&mut child, rng);
    }
    if rng.random::<f64>() < rates.inversion {
        invert(&mut child, rng);
    }

    child
}
