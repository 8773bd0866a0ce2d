//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{color_for_hours, colorize_optional, RESET};
use chrono::{DateTime, Local};

/// Hours rendered the way every view displays them: two decimals,
/// unrounded value supplied by the calculator.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Hours with the negative-value warning color applied.
pub fn fmt_hours_colored(hours: f64) -> String {
    format!("{}{}{}", color_for_hours(hours), fmt_hours(hours), RESET)
}

/// A clock instant as a local wall-clock time, or a greyed "N/A".
pub fn fmt_optional_time(t: Option<DateTime<Local>>) -> String {
    match t {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => colorize_optional("N/A"),
    }
}
