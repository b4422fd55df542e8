//! Display functions for command results

use super::formatters::{distribution_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let outcome = &result.outcome;
    let positions = result.size.positions();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} game, {} strategy)",
        outcome.secret.to_string().bright_yellow().bold(),
        result.size,
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in outcome.rounds.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            round.guess,
            feedback_pegs(round.feedback, positions),
            round.feedback.to_string().bright_black()
        );

        if verbose {
            println!("  Candidates: {}", round.candidates);
        }
    }

    println!();
    match &outcome.result {
        Ok(_) if outcome.success() => println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.turns)
                .green()
                .bold()
        ),
        Ok(code) => println!(
            "{}",
            format!("❌ Settled on {code}, which is not the secret").red().bold()
        ),
        Err(e) => println!(
            "{}",
            format!("❌ Failed after {} guesses: {e}", outcome.turns)
                .red()
                .bold()
        ),
    }

    if verbose {
        println!("   Time taken: {:.3}s", outcome.duration.as_secs_f64());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {} ({} game)", result.strategy, result.size);
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_games.max(1) as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for code in &result.failures {
            println!("   {code}");
        }
    }
}
