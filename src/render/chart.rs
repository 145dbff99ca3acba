use super::INDENT;
use crate::model::ContributionDay;
use chrono::NaiveDate;
use console::style;

const BAR: &str = "█";
/// `Mon 10/05 `
const LABEL_WIDTH: usize = 10;

pub fn bar_length(count: u32, max: u32, max_width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * max_width as f64).round() as usize
}

/// Horizontal bar per day, scaled so the busiest day fills the row.
pub fn render_chart(days: &[ContributionDay], today: NaiveDate, width: usize) -> String {
    let mut out = format!("{INDENT}{}\n", style(format!("Last {} days", days.len())).bold());
    if days.is_empty() {
        out.push_str(&format!("{INDENT}{}\n", style("No data to display").dim()));
        return out;
    }

    let max = days.iter().map(|d| d.contribution_count).max().unwrap_or(0);
    let count_width = max.to_string().len();
    let max_width = width.saturating_sub(INDENT.len() + LABEL_WIDTH + 1 + count_width);

    for day in days {
        let label = day.date.format("%a %m/%d").to_string();
        let label = if day.date == today {
            style(label).cyan().bold()
        } else {
            style(label).dim()
        };
        let len = bar_length(day.contribution_count, max, max_width);
        let bar = if len > 0 {
            format!("{} ", style(BAR.repeat(len)).green())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{INDENT}{label} {bar}{:>count_width$}\n",
            day.contribution_count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_lengths_are_rounded_proportions() {
        assert_eq!(bar_length(10, 10, 50), 50);
        assert_eq!(bar_length(5, 10, 50), 25);
        assert_eq!(bar_length(1, 3, 10), 3);
        assert_eq!(bar_length(2, 3, 10), 7);
        assert_eq!(bar_length(0, 10, 50), 0);
    }

    #[test]
    fn zero_max_draws_no_bars() {
        assert_eq!(bar_length(0, 0, 50), 0);
    }

    #[test]
    fn busiest_day_fills_the_row() {
        console::set_colors_enabled(false);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let days = vec![
            ContributionDay::new(today.pred_opt().unwrap(), 4),
            ContributionDay::new(today, 12),
        ];
        let out = render_chart(&days, today, 80);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "  Last 2 days");
        assert!(lines[1].starts_with("  Sat 10/17 "));
        // 80 - indent(2) - label(10) - gap(1) - digits(2)
        assert!(lines[2].contains(&BAR.repeat(65)));
        assert!(lines[2].ends_with(" 12"));
        assert_eq!(lines[1].matches(BAR).count(), 22);
    }
}
