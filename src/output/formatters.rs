//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};
use crate::solver::BullsMap;

/// Format feedback as a four-symbol badge: `●` bull, `○` cow, `·` miss
#[must_use]
pub fn feedback_badge(feedback: Feedback) -> String {
    let bulls = usize::from(feedback.bulls());
    let cows = usize::from(feedback.cows());
    let misses = CODE_LENGTH.saturating_sub(bulls + cows);

    format!("{}{}{}", "●".repeat(bulls), "○".repeat(cows), "·".repeat(misses))
}

/// Format the bulls map with one slot per position, e.g. `[1] [ ] [3] [ ]`
#[must_use]
pub fn bulls_slots(bulls: &BullsMap) -> String {
    (0..CODE_LENGTH)
        .map(|i| match bulls.get(i) {
            Some(d) => format!("[{d}]"),
            None => "[ ]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_all_miss() {
        assert_eq!(feedback_badge(Feedback::ZERO), "····");
    }

    #[test]
    fn badge_solved() {
        assert_eq!(feedback_badge(Feedback::SOLVED), "●●●●");
    }

    #[test]
    fn badge_mixed() {
        assert_eq!(feedback_badge(Feedback::new(2, 1).unwrap()), "●●○·");
        assert_eq!(feedback_badge(Feedback::new(0, 4).unwrap()), "○○○○");
    }

    #[test]
    fn bulls_slots_marks_unknown() {
        let mut bulls = BullsMap::new();
        bulls.bind(0, 1).unwrap();
        bulls.bind(2, 3).unwrap();
        assert_eq!(bulls_slots(&bulls), "[1] [ ] [3] [ ]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
