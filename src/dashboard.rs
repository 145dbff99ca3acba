use crate::cli::Cli;
use crate::fetch::{load_payload, GhClient};
use crate::model::DashboardSummary;
use crate::render::{layout_width, render_dashboard};
use crate::stats::summarize;
use anyhow::{Context, Result};
use chrono::Local;

pub fn exec(cli: Cli) -> Result<()> {
    let data = match &cli.input {
        Some(path) => load_payload(path)
            .with_context(|| format!("Failed to load payload from {}", path.display()))?,
        None => GhClient::new(cli.gh_bin.as_str())
            .with_timeout(cli.timeout)
            .fetch()
            .context("Failed to fetch contributions")?,
    };

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let summary = summarize(&data, today);

    if cli.json {
        output_json(&summary)?;
    } else {
        print!("{}", render_dashboard(&data, &summary, layout_width(cli.width)));
    }

    Ok(())
}

fn output_json(summary: &DashboardSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
