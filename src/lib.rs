//! Mastermind Solver
//!
//! Breaks Mastermind codes of any size up to 10 positions and 10 colors,
//! either with Knuth-style exact minimax or with a genetic search.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Code, GameSize};
//! use mastermind_solver::game::Game;
//! use mastermind_solver::solver::{SolverContext, Strategy, StrategyKind};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let secret = Code::parse("5432", GameSize::CLASSIC).unwrap();
//! let mut game = Game::with_secret(GameSize::CLASSIC, secret).unwrap();
//!
//! let context = SolverContext::new(8).unwrap();
//! let mut solver = context
//!     .build(StrategyKind::Minimax, &mut game, StdRng::seed_from_u64(1))
//!     .unwrap();
//! let code = solver.solve().unwrap();
//! println!("solved {code} in {} guesses", solver.rounds().len());
//! ```

// Core domain types
pub mod core;

// The code-setter side of a game
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
