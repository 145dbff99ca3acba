use super::{level_style, INDENT};
use crate::model::{ContributionDay, ContributionWeek};
use crate::stats::Buckets;
use chrono::{Datelike, NaiveDate};
use console::style;

const CELL: &str = "■";
const EMPTY_CELL: &str = "·";
const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LABELLED_ROWS: [usize; 3] = [1, 3, 5];
/// Day label column, e.g. `Mon `.
const GUTTER: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapLayout {
    /// Columns per week: 2 when everything fits with spacing, else 1.
    pub cell_width: usize,
    /// Weekday rows drawn, numbered from Sunday.
    pub rows: Vec<usize>,
    /// Trailing weeks that fit on screen.
    pub weeks_shown: usize,
}

impl HeatmapLayout {
    pub fn plan(weeks: usize, width: usize) -> Self {
        let available = width.saturating_sub(INDENT.len() + GUTTER);
        if weeks * 2 <= available {
            Self {
                cell_width: 2,
                rows: (0..7).collect(),
                weeks_shown: weeks,
            }
        } else {
            Self {
                cell_width: 1,
                rows: LABELLED_ROWS.to_vec(),
                weeks_shown: weeks.min(available),
            }
        }
    }

    pub fn grid_width(&self) -> usize {
        self.weeks_shown * self.cell_width
    }
}

/// Column offsets and names of month labels. The first column is labelled
/// with its month, then every week whose month differs from the week before.
/// A label that would run into the previous one is dropped, except that a
/// cramped leading label gives way to the first month change. Labels past
/// the grid are dropped.
pub fn month_labels(weeks: &[ContributionWeek], cell_width: usize) -> Vec<(usize, String)> {
    let grid_width = weeks.len() * cell_width;
    let mut labels: Vec<(usize, String)> = Vec::new();
    let mut prev_month = None;

    for (i, week) in weeks.iter().enumerate() {
        let Some(last) = week.contribution_days.last() else {
            continue;
        };
        let month = last.date.month();
        let changed = prev_month.map_or(true, |m| m != month);
        prev_month = Some(month);
        if !changed {
            continue;
        }

        let col = i * cell_width;
        let name = last.date.format("%b").to_string();
        if col + name.len() > grid_width {
            continue;
        }
        let collides = labels.last().is_some_and(|(c, n)| col <= c + n.len());
        if !collides {
            labels.push((col, name));
        } else if labels.len() == 1 && labels[0].0 == 0 {
            labels[0] = (col, name);
        }
    }
    labels
}

fn day_in_row(week: &ContributionWeek, row: usize) -> Option<&ContributionDay> {
    week.contribution_days
        .iter()
        .find(|d| d.date.weekday().num_days_from_sunday() as usize == row)
}

pub fn render_heatmap(
    weeks: &[ContributionWeek],
    buckets: &Buckets,
    today: NaiveDate,
    width: usize,
) -> String {
    let mut out = format!("{INDENT}{}\n", style("Contribution heatmap").bold());
    if weeks.is_empty() {
        out.push_str(&format!("{INDENT}{}\n", style("No data to display").dim()));
        return out;
    }

    let layout = HeatmapLayout::plan(weeks.len(), width);
    let shown = &weeks[weeks.len() - layout.weeks_shown..];

    let mut month_line = " ".repeat(layout.grid_width());
    for (col, name) in month_labels(shown, layout.cell_width) {
        month_line.replace_range(col..col + name.len(), &name);
    }
    out.push_str(&format!(
        "{INDENT}{}{}\n",
        " ".repeat(GUTTER),
        style(month_line.trim_end()).dim()
    ));

    for &row in &layout.rows {
        let label = if LABELLED_ROWS.contains(&row) {
            DAY_LABELS[row]
        } else {
            ""
        };
        let mut line = format!("{INDENT}{}", style(format!("{label:<GUTTER$}")).dim());
        for week in shown {
            let cell = match day_in_row(week, row) {
                Some(day) if day.date <= today => {
                    let level = buckets.level(day.contribution_count);
                    let glyph = if level == 0 { EMPTY_CELL } else { CELL };
                    level_style(level).apply_to(glyph).to_string()
                }
                _ => " ".to_string(),
            };
            line.push_str(&cell);
            if layout.cell_width == 2 {
                line.push(' ');
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let legend: Vec<String> = (0..=4u8)
        .map(|level| {
            let glyph = if level == 0 { EMPTY_CELL } else { CELL };
            level_style(level).apply_to(glyph).to_string()
        })
        .collect();
    out.push_str(&format!(
        "{INDENT}{}{} {} {}\n",
        " ".repeat(GUTTER),
        style("Less").dim(),
        legend.join(" "),
        style("More").dim()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Sunday-first weeks covering `from..=to`.
    fn weeks(from: NaiveDate, to: NaiveDate, count: u32) -> Vec<ContributionWeek> {
        let mut out: Vec<ContributionWeek> = Vec::new();
        for date in from.iter_days().take_while(|d| *d <= to) {
            if out.is_empty() || date.weekday().num_days_from_sunday() == 0 {
                out.push(ContributionWeek::default());
            }
            if let Some(week) = out.last_mut() {
                week.contribution_days.push(ContributionDay::new(date, count));
            }
        }
        out
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn wide_terminal_uses_double_cells_and_all_rows() {
        let layout = HeatmapLayout::plan(20, 80);
        assert_eq!(layout.cell_width, 2);
        assert_eq!(layout.rows, (0..7).collect::<Vec<_>>());
        assert_eq!(layout.weeks_shown, 20);
    }

    #[test]
    fn full_year_at_capped_width_uses_single_cells() {
        // 53 weeks need 106 columns at double width.
        let layout = HeatmapLayout::plan(53, 100);
        assert_eq!(layout.cell_width, 1);
        assert_eq!(layout.rows, vec![1, 3, 5]);
        assert_eq!(layout.weeks_shown, 53);
    }

    #[test]
    fn narrow_terminal_keeps_most_recent_weeks() {
        let layout = HeatmapLayout::plan(53, 40);
        assert_eq!(layout.cell_width, 1);
        assert_eq!(layout.weeks_shown, 34);
        assert_eq!(layout.grid_width(), 34);
    }

    #[test]
    fn month_labels_mark_first_column_and_changes() {
        let w = weeks(date(2026, 8, 2), date(2026, 10, 17), 1);
        let labels = month_labels(&w, 2);
        let names: Vec<_> = labels.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["Aug", "Sep", "Oct"]);
        assert_eq!(labels[0].0, 0);
        // Week of Aug 30 ends Sep 5.
        assert_eq!(labels[1].0, 4 * 2);
    }

    #[test]
    fn leading_month_keeps_its_label_when_there_is_room() {
        let w = weeks(date(2026, 1, 4), date(2026, 2, 7), 0);
        assert_eq!(
            month_labels(&w, 1),
            vec![(0, "Jan".to_string()), (4, "Feb".to_string())]
        );
    }

    #[test]
    fn overlapping_month_label_is_skipped() {
        // Single-width cells: Jan gives way to Feb, then Mar collides with Feb.
        let mut w = weeks(date(2026, 1, 4), date(2026, 1, 10), 0);
        w.extend(weeks(date(2026, 2, 1), date(2026, 2, 7), 0));
        w.extend(weeks(date(2026, 3, 1), date(2026, 3, 7), 0));
        w.extend(weeks(date(2026, 3, 8), date(2026, 3, 14), 0));
        w.extend(weeks(date(2026, 3, 15), date(2026, 3, 21), 0));
        w.extend(weeks(date(2026, 3, 22), date(2026, 3, 28), 0));
        let labels = month_labels(&w, 1);
        assert_eq!(labels, vec![(1, "Feb".to_string())]);
    }

    #[test]
    fn label_past_grid_edge_is_dropped() {
        let w = weeks(date(2026, 9, 20), date(2026, 10, 3), 0);
        assert_eq!(month_labels(&w, 1), Vec::new());
    }

    #[test]
    fn renders_rows_and_legend() {
        console::set_colors_enabled(false);
        let today = date(2026, 10, 14);
        let w = weeks(date(2026, 9, 20), today, 2);
        let out = render_heatmap(&w, &Buckets::default(), today, 80);
        let lines: Vec<_> = out.lines().collect();
        // title, months, 7 rows, legend
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "        Oct");
        assert_eq!(lines[2], "      ■ ■ ■ ■");
        assert_eq!(lines[3], "  Mon ■ ■ ■ ■");
        // The last week stops at Wednesday.
        assert_eq!(lines[6], "      ■ ■ ■");
        assert_eq!(lines[9], "      Less · ■ ■ ■ ■ More");
    }
}
