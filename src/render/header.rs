use super::{group_thousands, INDENT};
use crate::model::DashboardSummary;
use console::{pad_str, style, Alignment};

const LABEL_WIDTH: usize = 15;

pub fn render_header(summary: &DashboardSummary, width: usize) -> String {
    let rule_width = width.saturating_sub(INDENT.len() * 2);
    format!(
        "{INDENT}{} {}\n{INDENT}{} contributions in the last year\n{INDENT}{}\n",
        style("GitHub Contributions").bold(),
        style(format!("@{}", summary.login)).cyan(),
        style(group_thousands(summary.total_contributions as u64))
            .green()
            .bold(),
        style("─".repeat(rule_width)).dim(),
    )
}

/// Two fixed-width columns of label/value pairs.
pub fn render_stats_grid(summary: &DashboardSummary, width: usize) -> String {
    let avg = &summary.averages;
    let best = summary
        .best_day
        .map(|d| format!("{} ({})", d.contribution_count, d.date.format("%b %-d")))
        .unwrap_or_else(|| "-".to_string());
    let active_pct = if summary.elapsed_days == 0 {
        0.0
    } else {
        summary.active_days as f64 / summary.elapsed_days as f64 * 100.0
    };

    let cells = [
        ("Current streak", days(summary.current_streak), true),
        ("Longest streak", days(summary.longest_streak), true),
        ("Avg / week", format!("{:.1}", avg.per_week), false),
        ("Avg / month", format!("{:.1}", avg.per_month), false),
        ("Avg / quarter", format!("{:.1}", avg.per_quarter), false),
        ("Best day", best, false),
        ("This week", per_day(avg.this_week_daily), false),
        ("This month", per_day(avg.this_month_daily), false),
        ("This quarter", per_day(avg.this_quarter_daily), false),
        (
            "Active days",
            format!("{} ({active_pct:.0}%)", summary.active_days),
            false,
        ),
    ];

    let column = width.saturating_sub(INDENT.len()) / 2;
    let mut out = String::new();
    for row in cells.chunks(2) {
        out.push_str(INDENT);
        for (i, (label, value, highlight)) in row.iter().enumerate() {
            let value = if *highlight {
                style(value.as_str()).yellow().bold().to_string()
            } else {
                style(value.as_str()).bold().to_string()
            };
            let cell = format!(
                "{}{}",
                style(pad_str(label, LABEL_WIDTH, Alignment::Left, None)).dim(),
                value
            );
            if i + 1 < row.len() {
                out.push_str(&pad_str(&cell, column, Alignment::Left, None));
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }
    out
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

fn per_day(v: f64) -> String {
    format!("{v:.1} / day")
}
