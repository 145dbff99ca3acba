use crate::error::{PulseError, Result};
use crate::model::{GitHubData, GraphQlResponse};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Decodes a `gh api graphql` response body into [`GitHubData`].
pub fn parse_payload(body: &str) -> Result<GitHubData> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        return Err(PulseError::GraphQl(messages.join("; ")));
    }

    let viewer = response
        .data
        .and_then(|d| d.viewer)
        .ok_or(PulseError::MissingData("data.viewer"))?;
    let calendar = viewer
        .contributions_collection
        .map(|c| c.contribution_calendar)
        .ok_or(PulseError::MissingData("viewer.contributionsCollection"))?;

    calendar.validate()?;
    debug!(
        login = %viewer.login,
        weeks = calendar.weeks.len(),
        total = calendar.total_contributions,
        "decoded contribution calendar"
    );

    Ok(GitHubData {
        login: viewer.login,
        calendar,
    })
}

/// Reads a saved payload from `path`, or from stdin when `path` is `-`.
pub fn load_payload(path: &Path) -> Result<GitHubData> {
    let body = if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        body
    } else {
        std::fs::read_to_string(path)?
    };
    parse_payload(&body)
}
