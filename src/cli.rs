use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ghpulse")]
#[command(about = "Terminal dashboard for your GitHub contribution calendar")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "FILE", help = "Read a saved `gh api graphql` response instead of calling gh (`-` for stdin)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Print the computed statistics as JSON")]
    pub json: bool,

    #[arg(long, value_name = "COLS", help = "Layout width (defaults to the terminal width, at most 100)")]
    pub width: Option<usize>,

    #[arg(long = "gh", value_name = "PATH", default_value = "gh", help = "GitHub CLI executable")]
    pub gh_bin: String,

    #[arg(long, value_parser = humantime::parse_duration, default_value = "10s", help = "Give up on gh after this long")]
    pub timeout: Duration,

    #[arg(long, hide = true, value_name = "YYYY-MM-DD", help = "Treat this date as today")]
    pub today: Option<NaiveDate>,

    #[arg(short, long, help = "Log debug output to stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose);
        crate::dashboard::exec(self)
    }
}
