use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("`{0}` was not found")]
    GhMissing(String),
    #[error("`{program}` exited with status {code}: {message}")]
    GhFailed {
        program: String,
        code: i32,
        message: String,
    },
    #[error("`{program}` did not answer within {timeout}")]
    Timeout {
        program: String,
        timeout: humantime::Duration,
    },
    #[error("GraphQL reported errors: {0}")]
    GraphQl(String),
    #[error("Response is missing {0}")]
    MissingData(&'static str),
    #[error("Invalid calendar: {0}")]
    InvalidCalendar(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PulseError {
    /// Second line of the diagnostic printed before exiting.
    pub fn hint(&self) -> &'static str {
        match self {
            PulseError::GhMissing(_) => {
                "Install the GitHub CLI from https://cli.github.com and run `gh auth login`."
            }
            PulseError::GhFailed { .. } | PulseError::GraphQl(_) => {
                "Check that `gh auth status` succeeds, then try again."
            }
            PulseError::Timeout { .. } => {
                "GitHub did not respond in time; check your connection or raise --timeout."
            }
            PulseError::MissingData(_)
            | PulseError::InvalidCalendar(_)
            | PulseError::Serde(_) => {
                "The contribution payload was not in the expected shape."
            }
            PulseError::Io(_) => "Could not read the contribution payload.",
        }
    }
}
