//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code of a size and generates statistics.

use super::benchmark::{BenchmarkResult, summarize};
use super::solve::{play_game, seeded_rng};
use crate::core::{Code, GameSize};
use crate::game::Game;
use crate::output::formatters::distribution_bar;
use crate::solver::{CodeSpace, SolverContext, StrategyKind};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Reverse;
use std::time::Instant;

/// Statistics from testing every secret
pub struct TestAllStatistics {
    pub summary: BenchmarkResult,
    /// Solved secrets needing the most guesses, worst first
    pub hardest: Vec<(Code, usize)>,
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Run the solver on every code of `size`, or the first `limit` of them
///
/// # Errors
/// Returns an error if a solver cannot be started.
pub fn run_test_all(
    context: &SolverContext,
    kind: StrategyKind,
    size: GameSize,
    limit: Option<usize>,
    seed: Option<u64>,
) -> Result<TestAllStatistics> {
    let space = CodeSpace::enumerate(size);
    let secrets = &space.codes()[..limit.map_or(space.len(), |limit| limit.min(space.len()))];

    println!("🎯 Testing {} secrets...", secrets.len());
    let pb = progress_bar(secrets.len());

    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(secrets.len());
    let mut solved_guesses = 0;

    for (idx, secret) in secrets.iter().enumerate() {
        let mut game = Game::with_secret(size, secret.clone())?;
        let rng = seeded_rng(seed.map(|seed| seed.wrapping_add(idx as u64)), 1);
        let outcome = play_game(context, kind, &mut game, rng)?;

        if outcome.success() {
            solved_guesses += outcome.turns;
        } else {
            pb.println(format!("{} {}", "unsolved:".red(), outcome.secret));
        }
        outcomes.push(outcome);

        if idx % 10 == 0 {
            let solved = outcomes.iter().filter(|o| o.success()).count().max(1);
            pb.set_message(format!("Avg: {:.3}", solved_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let mut hardest: Vec<(Code, usize)> = outcomes
        .iter()
        .filter(|o| o.success())
        .map(|o| (o.secret.clone(), o.turns))
        .collect();
    hardest.sort_by_key(|(code, turns)| (Reverse(*turns), code.clone()));
    hardest.truncate(10);

    Ok(TestAllStatistics {
        summary: summarize(kind.name(), size, &outcomes, start.elapsed()),
        hardest,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    let summary = &stats.summary;
    let total = summary.total_games.max(1) as f64;

    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Strategy:            {}", summary.strategy);
    println!("  Game size:           {}", summary.size);
    println!("  Secrets tested:      {}", summary.total_games);
    println!(
        "  Successfully solved: {} {}",
        summary.solved,
        format!("({:.1}%)", summary.solved as f64 / total * 100.0).green()
    );
    if !summary.failures.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            summary.failures.len(),
            format!("({:.1}%)", summary.failures.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", summary.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Worst case:          {}", summary.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        summary.duration.as_secs_f64()
    );
    println!(
        "  Time per secret:     {:.1}ms",
        summary.duration.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = summary.distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=summary.max_guesses {
        let count = summary.distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / summary.solved.max(1) as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        println!("  {guesses} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (code, guesses) in stats.hardest.iter().take(5) {
            println!("  {} ({guesses} guesses)", code.to_string().yellow());
        }
    }

    if !summary.failures.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for code in summary.failures.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_small_size() {
        let context = SolverContext::new(4).unwrap();
        let size = GameSize::new(3, 4).unwrap();
        let stats = run_test_all(&context, StrategyKind::Minimax, size, None, None).unwrap();

        assert_eq!(stats.summary.total_games, 64);
        assert_eq!(stats.summary.solved, 64);
        assert!(stats.summary.failures.is_empty());
        assert_eq!(stats.hardest.first().map(|(_, n)| *n), Some(stats.summary.max_guesses));
    }

    #[test]
    fn test_all_respects_limit() {
        let context = SolverContext::new(4).unwrap();
        let stats = run_test_all(
            &context,
            StrategyKind::Minimax,
            GameSize::CLASSIC,
            Some(12),
            None,
        )
        .unwrap();

        assert_eq!(stats.summary.total_games, 12);
        assert!(stats.summary.max_guesses <= 5);
        let distribution_sum: usize = stats.summary.distribution.values().sum();
        assert_eq!(distribution_sum, 12);
    }

    #[test]
    fn hardest_sorted_worst_first() {
        let context = SolverContext::new(4).unwrap();
        let size = GameSize::new(2, 5).unwrap();
        let stats = run_test_all(&context, StrategyKind::Minimax, size, None, None).unwrap();

        assert!(stats.hardest.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert!(stats.hardest.len() <= 10);
    }
}
