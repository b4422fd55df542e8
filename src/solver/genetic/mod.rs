//! Genetic code-breaking
//!
//! Instead of tracking every consistent code, each move evolves a population
//! of candidates, ranked by how well they agree with past feedback, and
//! guesses one that agrees completely.

mod citizen;
mod engine;
mod fitness;
pub mod operators;

pub use citizen::{Citizen, Population, random_population};
pub use engine::{GeneticConfig, GeneticSolver, initial_guess};
pub use fitness::FitnessWeights;
pub use operators::OperatorRates;
