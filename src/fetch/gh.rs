use crate::error::{PulseError, Result};
use crate::model::GitHubData;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{ErrorKind, Read};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

use super::parse_payload;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const QUERY: &str = "query {
  viewer {
    login
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}";

/// Runs the GitHub CLI to fetch the viewer's contribution calendar.
/// Authentication and transport are entirely `gh`'s business.
#[derive(Debug, Clone)]
pub struct GhClient {
    program: String,
    timeout: Duration,
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GhClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn fetch(&self) -> Result<GitHubData> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Fetching contributions from GitHub...");
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = self.run();
        pb.finish_and_clear();

        let stdout = result?;
        parse_payload(&stdout)
    }

    /// Runs `gh api graphql` and returns its stdout once it exits successfully.
    fn run(&self) -> Result<String> {
        let query_arg = format!("query={QUERY}");
        debug!(program = %self.program, timeout = ?self.timeout, "spawning gh api graphql");

        let mut child = match Command::new(&self.program)
            .args(["api", "graphql", "-f", &query_arg])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PulseError::GhMissing(self.program.clone()));
            }
            Err(e) => return Err(PulseError::Io(e)),
        };

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if started.elapsed() >= self.timeout => {
                    debug!(program = %self.program, "killing gh after timeout");
                    kill(&mut child);
                    return Err(PulseError::Timeout {
                        program: self.program.clone(),
                        timeout: self.timeout.into(),
                    });
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };
        debug!(elapsed = ?started.elapsed(), %status, "gh exited");

        let stdout = join(stdout)?;
        let stderr = join(stderr)?;

        if !status.success() {
            let message = stderr
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .unwrap_or("no error output")
                .to_string();
            return Err(PulseError::GhFailed {
                program: self.program.clone(),
                code: status.code().unwrap_or(-1),
                message,
            });
        }

        Ok(stdout)
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<std::io::Result<String>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        })
    })
}

fn join(handle: Option<JoinHandle<std::io::Result<String>>>) -> Result<String> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| PulseError::Io(std::io::Error::other("pipe reader panicked")))?
            .map_err(PulseError::Io),
        None => Ok(String::new()),
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
