pub mod averages;
pub mod buckets;
pub mod streak;

pub use averages::averages;
pub use buckets::Buckets;
pub use streak::{current_streak, longest_streak};

use crate::model::{ContributionDay, DashboardSummary, GitHubData, SCHEMA_VERSION};
use chrono::{NaiveDate, Utc};
use tracing::debug;

pub const CHART_DAYS: usize = 14;

/// Trailing `n` days up to and including `today`, oldest first.
pub fn last_days(days: &[ContributionDay], today: NaiveDate, n: usize) -> Vec<ContributionDay> {
    let upto: Vec<_> = days.iter().filter(|d| d.date <= today).copied().collect();
    upto[upto.len().saturating_sub(n)..].to_vec()
}

/// Highest-count day; the earliest one wins ties.
pub fn best_day(days: &[ContributionDay]) -> Option<ContributionDay> {
    days.iter()
        .filter(|d| d.is_active())
        .fold(None, |best: Option<ContributionDay>, d| match best {
            Some(b) if b.contribution_count >= d.contribution_count => Some(b),
            _ => Some(*d),
        })
}

pub fn summarize(data: &GitHubData, today: NaiveDate) -> DashboardSummary {
    let days = data.calendar.days();
    let elapsed: Vec<_> = days.iter().filter(|d| d.date <= today).copied().collect();
    let buckets = Buckets::from_days(&elapsed);

    let summary = DashboardSummary {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        login: data.login.clone(),
        today,
        total_contributions: data.calendar.total_contributions,
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&elapsed),
        active_days: elapsed.iter().filter(|d| d.is_active()).count() as u32,
        elapsed_days: elapsed.len() as u32,
        best_day: best_day(&elapsed),
        averages: averages(&days, data.calendar.total_contributions, today),
        bucket_edges: buckets.edges(),
        last_14_days: last_days(&days, today, CHART_DAYS),
    };
    debug!(
        days = days.len(),
        elapsed = summary.elapsed_days,
        edges = ?summary.bucket_edges,
        "computed contribution stats"
    );
    summary
}
