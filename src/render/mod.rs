pub mod chart;
pub mod header;
pub mod heatmap;

pub use chart::render_chart;
pub use header::{render_header, render_stats_grid};
pub use heatmap::render_heatmap;

use crate::model::{DashboardSummary, GitHubData};
use crate::stats::Buckets;
use console::{Style, Term};

pub const DEFAULT_WIDTH: usize = 80;
pub const MAX_WIDTH: usize = 100;
pub const MIN_WIDTH: usize = 40;

/// Left margin shared by every section.
pub(crate) const INDENT: &str = "  ";

/// Width the dashboard is laid out for. An explicit width wins over the
/// detected terminal size; both are capped.
pub fn layout_width(requested: Option<usize>) -> usize {
    match requested {
        Some(w) => w.clamp(MIN_WIDTH, MAX_WIDTH),
        None => Term::stdout()
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .filter(|&cols| cols > 0)
            .unwrap_or(DEFAULT_WIDTH)
            .min(MAX_WIDTH),
    }
}

pub fn render_dashboard(data: &GitHubData, summary: &DashboardSummary, width: usize) -> String {
    let buckets = Buckets::from_edges(summary.bucket_edges);

    [
        render_header(summary, width),
        render_stats_grid(summary, width),
        render_chart(&summary.last_14_days, summary.today, width),
        render_heatmap(&data.calendar.weeks, &buckets, summary.today, width),
    ]
    .join("\n")
}

/// Heatmap and legend color for an intensity level.
pub(crate) fn level_style(level: u8) -> Style {
    match level {
        0 => Style::new().color256(238),
        1 => Style::new().color256(22),
        2 => Style::new().color256(28),
        3 => Style::new().color256(34),
        _ => Style::new().color256(40),
    }
}

/// `1234567` -> `1,234,567`
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
