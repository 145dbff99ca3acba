use crate::model::{Averages, ContributionDay};
use chrono::{Datelike, Duration, NaiveDate};

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.44;
const DAYS_PER_QUARTER: f64 = 91.31;

/// `total` is the calendar's reported total; `days` only contributes the
/// elapsed day count and the per-period daily means.
pub fn averages(days: &[ContributionDay], total: u32, today: NaiveDate) -> Averages {
    let elapsed = days.iter().filter(|d| d.date <= today).count().max(1) as f64;
    let per_day = total as f64 / elapsed;

    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let month_start = today.with_day(1).unwrap_or(today);
    let quarter_start = NaiveDate::from_ymd_opt(today.year(), quarter_first_month(today), 1)
        .unwrap_or(month_start);

    Averages {
        per_week: per_day * DAYS_PER_WEEK,
        per_month: per_day * DAYS_PER_MONTH,
        per_quarter: per_day * DAYS_PER_QUARTER,
        this_week_daily: daily_mean(days, week_start, today),
        this_month_daily: daily_mean(days, month_start, today),
        this_quarter_daily: daily_mean(days, quarter_start, today),
    }
}

fn quarter_first_month(date: NaiveDate) -> u32 {
    (date.month0() / 3) * 3 + 1
}

fn daily_mean(days: &[ContributionDay], from: NaiveDate, to: NaiveDate) -> f64 {
    let (sum, n) = days
        .iter()
        .filter(|d| d.date >= from && d.date <= to)
        .fold((0u64, 0u32), |(sum, n), d| {
            (sum + d.contribution_count as u64, n + 1)
        });
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}
