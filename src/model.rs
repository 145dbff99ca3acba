use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PulseError, Result};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(rename = "contributionCount")]
    pub contribution_count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, contribution_count: u32) -> Self {
        Self {
            date,
            contribution_count,
        }
    }

    pub fn is_active(&self) -> bool {
        self.contribution_count > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionWeek {
    #[serde(rename = "contributionDays")]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarData {
    #[serde(rename = "totalContributions")]
    pub total_contributions: u32,
    pub weeks: Vec<ContributionWeek>,
}

impl CalendarData {
    /// Flattens the weeks into one chronological list of days.
    pub fn days(&self) -> Vec<ContributionDay> {
        self.weeks
            .iter()
            .flat_map(|w| w.contribution_days.iter().copied())
            .collect()
    }

    /// Days must run one after another with nothing skipped or repeated.
    pub fn validate(&self) -> Result<()> {
        for pair in self.days().windows(2) {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(PulseError::InvalidCalendar(format!(
                    "{} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct GitHubData {
    pub login: String,
    pub calendar: CalendarData,
}

// GraphQL envelope returned by `gh api graphql`.

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<ViewerData>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewerData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Viewer {
    pub login: String,
    #[serde(rename = "contributionsCollection")]
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContributionsCollection {
    #[serde(rename = "contributionCalendar")]
    pub contribution_calendar: CalendarData,
}

#[derive(Debug, Clone, Serialize)]
pub struct Averages {
    pub per_week: f64,
    pub per_month: f64,
    pub per_quarter: f64,
    pub this_week_daily: f64,
    pub this_month_daily: f64,
    pub this_quarter_daily: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub today: NaiveDate,
    pub total_contributions: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
    pub elapsed_days: u32,
    pub best_day: Option<ContributionDay>,
    pub averages: Averages,
    pub bucket_edges: [u32; 4],
    pub last_14_days: Vec<ContributionDay>,
}
