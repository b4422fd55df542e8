//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with an exact minimax search or a genetic search.
//! Set `RUST_LOG=debug` to follow every round.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_test_all, solve_code,
    },
    core::GameSize,
    output::{print_benchmark_result, print_solve_result},
    solver::{DEFAULT_CEILING, SolverContext, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaker using exact minimax or genetic search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of positions in a code
    #[arg(short, long, global = true, default_value = "4")]
    positions: usize,

    /// Number of colors available per position
    #[arg(short, long, global = true, default_value = "6")]
    colors: u8,

    /// Strategy: minimax (default) or genetic
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Seed for random secrets and the genetic solver
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Maximum number of candidates scored at once
    #[arg(long, global = true, default_value_t = DEFAULT_CEILING)]
    ceiling: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one secret (random if omitted)
    Solve {
        /// The secret to break, one digit per position, e.g. 5432
        secret: Option<String>,

        /// Show candidate counts and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let size = GameSize::new(cli.positions, cli.colors).context("invalid game size")?;
    let kind = StrategyKind::from_name(&cli.strategy)
        .with_context(|| format!("unknown strategy {:?}", cli.strategy))?;
    let context = SolverContext::new(cli.ceiling).context("failed to start evaluator")?;

    let command = cli.command.unwrap_or(Commands::Solve {
        secret: None,
        verbose: false,
    });

    match command {
        Commands::Solve { secret, verbose } => {
            let mut config = SolveConfig::new(size, kind);
            config.secret = secret;
            config.seed = cli.seed;
            let result = solve_code(config, &context)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random {size} secrets...");
            let result = run_benchmark(&context, kind, size, count, cli.seed)?;
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nGame size: {size} ({} possible secrets)", size.space_size());
            println!("Strategy: {}", kind.name());
            println!();

            let stats = run_test_all(&context, kind, size, limit, cli.seed)?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
