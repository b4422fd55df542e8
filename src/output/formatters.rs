//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::Colorize;

/// Format feedback as key pegs: one black per exact hit, one white per
/// partial hit, a dot for each position with neither
#[must_use]
pub fn feedback_pegs(feedback: Feedback, positions: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = positions.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
}

/// Colored histogram bar for `count` out of a largest bucket of `max`
///
/// Any non-zero count gets at least one filled cell.
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max > 0 {
        (count * width / max).max(usize::from(count > 0)).min(width)
    } else {
        0
    };

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_hits() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_all_exact() {
        assert_eq!(feedback_pegs(Feedback::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2), 5), "●○○··");
    }

    #[test]
    fn distribution_bar_width() {
        colored::control::set_override(false);
        assert_eq!(distribution_bar(1, 1000, 10), "█░░░░░░░░░");
        assert_eq!(distribution_bar(0, 10, 4), "░░░░");
        assert_eq!(distribution_bar(10, 10, 4), "████");
    }
}
