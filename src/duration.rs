//! `MM:SS` / `HH:MM:SS` rendering of millisecond durations.
//!
//! Milliseconds are rounded to whole seconds half-to-even, so 59.5 s becomes
//! 60 s and 0.5 s becomes 0 s. The same rule applies to integer and averaged
//! (real-valued) inputs.

/// Format an integer millisecond duration.
pub fn format_millis(ms: u64) -> String {
    let whole = ms / 1000;
    let rest = ms % 1000;
    let seconds = if rest > 500 || (rest == 500 && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };
    format_seconds(seconds)
}

/// Format a real-valued millisecond duration, e.g. an average runtime.
/// Negative and non-finite inputs render as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_millis_f64(ms: f64) -> String {
    let seconds = (ms / 1000.0).round_ties_even();
    if !seconds.is_finite() || seconds <= 0.0 {
        return format_seconds(0);
    }
    format_seconds(seconds as u64)
}

fn format_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
