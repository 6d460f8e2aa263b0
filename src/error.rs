use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by a single leaderboard source.
///
/// These are recoverable: the acquisition orchestrator catches them and
/// falls through to the next tier.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("not found: no ranked table in any fetched page")]
    NotFound,

    #[error("unconfigured: no API credential available")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("implausible result: {count} entries (minimum {min})")]
    Implausible { count: usize, min: usize },
}

/// Raised when every configured source tier failed in one cycle.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("primary source failed ({primary}); no backup source configured")]
    PrimaryFailed { primary: SourceError },

    #[error("all sources failed: primary: {primary}; backup: {backup}")]
    Exhausted {
        primary: SourceError,
        backup: SourceError,
    },
}

impl AcquisitionError {
    /// The error of the last tier that was attempted.
    #[must_use]
    pub fn last(&self) -> &SourceError {
        match self {
            Self::PrimaryFailed { primary } => primary,
            Self::Exhausted { backup, .. } => backup,
        }
    }
}

/// Snapshot persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Report rendering errors. Not expected in normal operation.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("failed to render report: {0}")]
    Write(#[from] std::fmt::Error),

    #[error("message budget must be at least one character")]
    InvalidBudget,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
