/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";

/// Hours color: negative totals are a data-entry problem and show red,
/// everything else stays unstyled.
pub fn color_for_hours(value: f64) -> &'static str {
    if value < 0.0 { RED } else { RESET }
}

/// Grey out placeholder values such as a missing clock time.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
