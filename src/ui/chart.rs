//! ASCII bar chart for hour totals.

use crate::utils::formatting::fmt_hours;
use unicode_width::UnicodeWidthStr;

pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

/// Render labelled horizontal bars, scaled so the largest positive value
/// fills `width` cells. Negative values get no bar, only the figure; a
/// chart of only zero/negative values prints bare labels.
pub fn render_bar_chart(rows: &[ChartRow], width: usize) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let label_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(0);

    let max_value = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for row in rows {
        let bar_len = if max_value > 0.0 && row.value > 0.0 {
            ((row.value / max_value) * width as f64).round() as usize
        } else {
            0
        };

        out.push_str(&format!(
            "{:<label_width$}  {:<width$}  {}\n",
            row.label,
            "█".repeat(bar_len),
            fmt_hours(row.value),
            label_width = label_width,
            width = width,
        ));
    }

    out
}
