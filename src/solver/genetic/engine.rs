//! Genetic solver loop

use super::citizen::{self, Citizen, Population};
use super::fitness::FitnessWeights;
use super::operators::{OperatorRates, spawn};
use crate::core::{Code, GameSize};
use crate::game::Oracle;
use crate::solver::{Evaluator, Round, SolveError, Strategy};
use rand::Rng;
use std::sync::Arc;

/// Draws allowed when replacing a duplicate child with a fresh random code
const REPLACEMENT_ATTEMPTS: usize = 16;

/// Tunables for [`GeneticSolver`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticConfig {
    /// Target population size
    pub population: usize,
    /// Generations evolved per move at most
    pub max_generations: usize,
    /// Stop evolving once this many eligible codes are known
    pub sample_target: usize,
    /// Largest penalty-free fitness that counts as eligible
    pub threshold: f64,
    /// Guesses allowed before giving up
    pub max_moves: usize,
    pub weights: FitnessWeights,
    pub rates: OperatorRates,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population: 150,
            max_generations: 100,
            sample_target: 60,
            threshold: 0.0,
            max_moves: 9,
            weights: FitnessWeights::default(),
            rates: OperatorRates::default(),
        }
    }
}

/// Code-breaker that evolves a population toward codes consistent with
/// every feedback seen so far, then guesses one of them
pub struct GeneticSolver<O: Oracle, R: Rng> {
    game: O,
    config: GeneticConfig,
    rng: R,
    evaluator: Arc<Evaluator>,
    rounds: Vec<Round>,
}

/// Opening guess for a size
///
/// Known good openings for 4, 5 and 6 positions; other lengths repeat the
/// first color and then count upward. Colors wrap at the alphabet size.
#[must_use]
pub fn initial_guess(size: GameSize) -> Code {
    let colors = size.colors();
    let pattern: Vec<u8> = match size.positions() {
        6 => vec![0, 0, 1, 1, 2, 3],
        positions => (0..positions).map(|i| i.max(1) as u8 - 1).collect(),
    };

    Code::new(pattern.into_iter().map(|color| color % colors).collect())
}

impl<O: Oracle, R: Rng> GeneticSolver<O, R> {
    /// Create a solver bound to `game`, resetting its turn counter
    pub fn new(mut game: O, config: GeneticConfig, rng: R, evaluator: Arc<Evaluator>) -> Self {
        game.reset();
        Self {
            game,
            config,
            rng,
            evaluator,
            rounds: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// The game being played
    pub const fn game(&self) -> &O {
        &self.game
    }

    /// Score every citizen against the history in parallel
    ///
    /// Results are keyed by code, so the returned population does not depend
    /// on worker completion order.
    fn evaluate(
        &self,
        population: Population,
        move_number: usize,
    ) -> Result<Population, SolveError> {
        let size = self.game.size();
        let weights = self.config.weights;
        let history = self.rounds.as_slice();
        let codes: Vec<Code> = population.into_keys().collect();

        let mut scored = self.evaluator.run(
            &codes,
            Vec::with_capacity(codes.len()),
            |code| Ok(weights.fitness(code, history, move_number, size)?),
            |scored: &mut Vec<Citizen>, code, fitness| {
                scored.push(Citizen::new(code.clone()).with_fitness(fitness));
            },
        )?;
        scored.sort_by(|a, b| a.code().cmp(b.code()));

        let mut population = Population::default();
        population.reserve(scored.len());
        for c in scored {
            citizen::insert(&mut population, c);
        }
        Ok(population)
    }

    /// Copy every eligible citizen of `population` into `eligible`
    fn collect_eligible(
        &self,
        population: &Population,
        eligible: &mut Population,
        move_number: usize,
    ) {
        let size = self.game.size();
        let GeneticConfig {
            weights, threshold, ..
        } = &self.config;
        let mut found: Vec<&Citizen> = population
            .values()
            .filter(|c| weights.is_eligible(c.fitness(), move_number, size, *threshold))
            .collect();
        found.sort_by(|a, b| a.code().cmp(b.code()));

        for c in found {
            citizen::insert(eligible, c.clone());
        }
    }

    /// Breed the next generation from the better half of `population`
    ///
    /// Parents survive alongside their children. A parent or child that is
    /// already present is replaced by a random code that is not, and the
    /// generation is topped up with random codes to the target size.
    fn generate(&mut self, population: &Population) -> Population {
        let size = self.game.size();
        let target = self.config.population;
        let mut ranked: Vec<&Citizen> = population.values().collect();
        ranked.sort_by(|a, b| a.rank_cmp(b));

        let elders = ranked.len().min(target) / 2;
        let mut next = Population::default();
        next.reserve(target);

        for pair in ranked[..elders].chunks_exact(2) {
            let (x, y) = (pair[0].code(), pair[1].code());
            let children = [
                spawn(x, y, &self.config.rates, size, &mut self.rng),
                spawn(y, x, &self.config.rates, size, &mut self.rng),
            ];

            for code in [x.clone(), y.clone()].into_iter().chain(children) {
                if let Some(code) = self.fresh(code, &next) {
                    citizen::insert(&mut next, Citizen::new(code));
                }
            }
        }

        citizen::fill(&mut next, size, target, &mut self.rng);
        next
    }

    /// `code` if it is new to `population`, else a random code that is
    fn fresh(&mut self, code: Code, population: &Population) -> Option<Code> {
        if !population.contains_key(&code) {
            return Some(code);
        }

        let size = self.game.size();
        (0..REPLACEMENT_ATTEMPTS)
            .map(|_| Code::random(size, &mut self.rng))
            .find(|code| !population.contains_key(code))
    }

    /// Evolve populations until enough eligible codes are found for the
    /// next move
    fn evolve(&mut self, carried: Population) -> Result<Population, SolveError> {
        let size = self.game.size();
        let move_number = self.rounds.len();
        let target = self.config.sample_target;

        let mut population =
            citizen::random_population(size, self.config.population, &mut self.rng);
        for (code, c) in carried {
            population.entry(code).or_insert(c);
        }
        population = self.evaluate(population, move_number)?;

        let mut eligible = Population::default();
        self.collect_eligible(&population, &mut eligible, move_number);

        let mut generation = 0;
        while generation < self.config.max_generations && eligible.len() < target {
            generation += 1;

            for c in eligible.values() {
                citizen::insert(&mut population, c.clone());
            }
            let next = self.generate(&population);
            population = self.evaluate(next, move_number)?;
            self.collect_eligible(&population, &mut eligible, move_number);
        }

        log::debug!(
            "move {move_number}: {} eligible codes after {generation} generations (population {})",
            eligible.len(),
            population.len()
        );
        Ok(eligible)
    }

    /// First eligible code, or a random one if evolution found none
    fn best_candidate(&mut self, eligible: &Population) -> Code {
        if let Some(code) = eligible.keys().next() {
            return code.clone();
        }

        log::warn!(
            "no eligible code found for move {}, guessing at random",
            self.rounds.len() + 1
        );
        Code::random(self.game.size(), &mut self.rng)
    }
}

impl<O: Oracle, R: Rng> Strategy for GeneticSolver<O, R> {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn solve(&mut self) -> Result<Code, SolveError> {
        let mut guess = initial_guess(self.game.size());
        let mut eligible = Population::default();

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

            // candidates are filled in once the next sample is known
            self.rounds.push(Round {
                guess,
                feedback,
                candidates: 0,
            });
            let moves = self.rounds.len();
            if moves >= self.config.max_moves {
                return Err(SolveError::Exhausted { moves });
            }

            eligible = self.evolve(eligible)?;
            if let Some(round) = self.rounds.last_mut() {
                round.candidates = eligible.len();
            }

            guess = self.best_candidate(&eligible);
            log::debug!("move {}: next guess {guess}", moves + 1);
        }
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn evaluator() -> Arc<Evaluator> {
        Arc::new(Evaluator::new(4).unwrap())
    }

    #[test]
    fn initial_guesses() {
        let guess = |p, c| initial_guess(GameSize::new(p, c).unwrap()).to_string();

        assert_eq!(guess(4, 6), "0012");
        assert_eq!(guess(5, 6), "00123");
        assert_eq!(guess(6, 6), "001123");
        assert_eq!(guess(3, 6), "001");
        assert_eq!(guess(7, 8), "0012345");
        assert_eq!(guess(5, 3), "00120");
    }

    #[test]
    fn defaults() {
        let config = GeneticConfig::default();
        assert_eq!(config.population, 150);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.sample_target, 60);
        assert_eq!(config.max_moves, 9);
        assert!(config.threshold.abs() < f64::EPSILON);
    }

    #[test]
    fn solves_seeded_games() {
        let mut solved = 0;
        for (seed, secret) in [(1, [5, 4, 3, 2]), (2, [0, 0, 0, 0]), (3, [1, 2, 1, 2])] {
            let mut game = Game::with_secret(GameSize::CLASSIC, Code::from(secret)).unwrap();
            let mut solver = GeneticSolver::new(
                &mut game,
                GeneticConfig::default(),
                StdRng::seed_from_u64(seed),
                evaluator(),
            );

            if let Ok(code) = solver.solve() {
                assert_eq!(code, Code::from(secret));
                assert!(solver.rounds().len() <= 9);
                solved += 1;
            }
        }
        assert!(solved >= 2);
    }

    #[test]
    fn eligible_codes_are_consistent() {
        let size = GameSize::CLASSIC;
        let secret = Code::from([3, 1, 4, 1]);
        let mut game = Game::with_secret(size, secret.clone()).unwrap();
        let mut solver = GeneticSolver::new(
            &mut game,
            GeneticConfig::default(),
            StdRng::seed_from_u64(42),
            evaluator(),
        );

        let guess = initial_guess(size);
        let feedback = solver.game.scored_guess(&guess).unwrap();
        solver.rounds.push(Round {
            guess,
            feedback,
            candidates: 0,
        });

        let eligible = solver.evolve(Population::default()).unwrap();
        assert!(!eligible.is_empty());
        for (code, c) in &eligible {
            // one guess scored, so consistent codes carry no move penalty
            assert!(c.fitness().abs() < f64::EPSILON);
            for round in &solver.rounds {
                let f = crate::core::Feedback::check(code, &round.guess, 6).unwrap();
                assert_eq!(f, round.feedback);
            }
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = || {
            let mut game = Game::with_secret(GameSize::CLASSIC, Code::from([2, 5, 0, 4])).unwrap();
            let mut solver = GeneticSolver::new(
                &mut game,
                GeneticConfig::default(),
                StdRng::seed_from_u64(99),
                evaluator(),
            );
            let _ = solver.solve();
            solver.rounds().to_vec()
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn gives_up_after_max_moves() {
        let mut game = Game::with_secret(GameSize::CLASSIC, Code::from([5, 5, 5, 5])).unwrap();
        let config = GeneticConfig {
            max_moves: 1,
            ..GeneticConfig::default()
        };
        let mut solver = GeneticSolver::new(&mut game, config, StdRng::seed_from_u64(0), evaluator());

        let err = solver.solve().unwrap_err();
        assert!(matches!(err, SolveError::Exhausted { moves: 1 }));
        assert_eq!(err.to_string(), "no solution found in 1 moves");
        assert_eq!(solver.rounds().len(), 1);
    }

    #[test]
    fn generation_keeps_population_unique_and_bounded() {
        let size = GameSize::CLASSIC;
        let mut game = Game::with_secret(size, Code::from([0, 1, 2, 3])).unwrap();
        let mut solver = GeneticSolver::new(
            &mut game,
            GeneticConfig::default(),
            StdRng::seed_from_u64(8),
            evaluator(),
        );

        let mut rng = StdRng::seed_from_u64(8);
        let population = citizen::random_population(size, 150, &mut rng);
        let next = solver.generate(&population);

        assert_eq!(next.len(), 150);
        for (code, c) in &next {
            assert_eq!(code, c.code());
            assert!(code.validate(size).is_ok());
        }
    }

    #[test]
    fn population_holds_its_size_across_generations() {
        let size = GameSize::CLASSIC;
        let mut game = Game::with_secret(size, Code::from([4, 4, 0, 3])).unwrap();
        let mut solver = GeneticSolver::new(
            &mut game,
            GeneticConfig::default(),
            StdRng::seed_from_u64(30),
            evaluator(),
        );

        let guess = initial_guess(size);
        let feedback = solver.game.scored_guess(&guess).unwrap();
        solver.rounds.push(Round {
            guess,
            feedback,
            candidates: 0,
        });

        let mut rng = StdRng::seed_from_u64(30);
        let moves = solver.rounds.len();
        let mut population = solver
            .evaluate(citizen::random_population(size, 150, &mut rng), moves)
            .unwrap();

        for _ in 0..30 {
            let next = solver.generate(&population);
            population = solver.evaluate(next, moves).unwrap();
            assert_eq!(population.len(), 150);
        }
    }

    #[test]
    fn tiny_spaces_fill_to_capacity() {
        let size = GameSize::new(2, 2).unwrap();
        let mut game = Game::with_secret(size, Code::from([1, 0])).unwrap();
        let mut solver = GeneticSolver::new(
            &mut game,
            GeneticConfig::default(),
            StdRng::seed_from_u64(3),
            evaluator(),
        );

        let mut rng = StdRng::seed_from_u64(3);
        let population = citizen::random_population(size, 150, &mut rng);
        assert_eq!(solver.generate(&population).len(), 4);
    }
}
