//! Population members

use crate::core::{Code, GameSize};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// A population member: a code and its last computed fitness
#[derive(Debug, Clone, PartialEq)]
pub struct Citizen {
    code: Code,
    fitness: f64,
}

impl Citizen {
    /// A citizen that has not been evaluated yet
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self { code, fitness: 0.0 }
    }

    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[must_use]
    pub const fn fitness(&self) -> f64 {
        self.fitness
    }

    #[must_use]
    pub fn with_fitness(self, fitness: f64) -> Self {
        Self { fitness, ..self }
    }

    #[must_use]
    pub fn into_code(self) -> Code {
        self.code
    }

    /// Ascending fitness, then code, for a total and deterministic ranking
    pub(crate) fn rank_cmp(&self, other: &Self) -> Ordering {
        self.fitness
            .total_cmp(&other.fitness)
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl fmt::Display for Citizen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {:.2}}}", self.code, self.fitness)
    }
}

/// Citizens keyed by their code, so every code appears at most once
pub type Population = FxHashMap<Code, Citizen>;

/// Add a citizen, replacing any member with the same code
pub fn insert(population: &mut Population, citizen: Citizen) {
    population.insert(citizen.code().clone(), citizen);
}

/// A population of `count` distinct random codes
///
/// Capped at the size of the code space.
pub fn random_population<R: Rng>(size: GameSize, count: usize, rng: &mut R) -> Population {
    let mut population = Population::default();
    fill(&mut population, size, count, rng);
    population
}

/// Add distinct random codes until `population` holds `count` members
///
/// Capped at the size of the code space; never removes anyone.
pub fn fill<R: Rng>(population: &mut Population, size: GameSize, count: usize, rng: &mut R) {
    let target = usize::try_from(size.space_size()).map_or(count, |space| count.min(space));
    population.reserve(target.saturating_sub(population.len()));

    while population.len() < target {
        let code = Code::random(size, rng);
        population
            .entry(code)
            .or_insert_with_key(|code| Citizen::new(code.clone()));
    }
}
