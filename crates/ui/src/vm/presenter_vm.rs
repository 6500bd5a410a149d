//! Presentation helpers: turning presenter state into display strings and
//! CSS hooks. Kept out of the view so they can be unit tested.

use services::PresenterPhase;

/// Status line under the big countdown.
#[must_use]
pub fn status_text(phase: Option<PresenterPhase>) -> &'static str {
    match phase {
        Some(PresenterPhase::Running) => "Running",
        Some(PresenterPhase::Revealed) => "Answer shown",
        Some(PresenterPhase::Complete) => "Finished",
        Some(PresenterPhase::AwaitingStart) => "Paused",
        None => "No quiz loaded",
    }
}

#[must_use]
pub fn format_seconds(secs: u32) -> String {
    format!("{secs}s")
}

/// Whole-percent progress through the set, 1-based position.
#[must_use]
pub fn progress_percent(position: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = position * 100 / total;
    u32::try_from(percent.min(100)).unwrap_or(100)
}

/// CSS class for an option row, highlighting the correct one after reveal.
#[must_use]
pub fn option_class(revealed: bool, is_correct: bool) -> &'static str {
    if revealed && is_correct {
        "option option--correct"
    } else {
        "option"
    }
}
