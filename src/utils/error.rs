use crate::domain::model::SpecState;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("OpenAPI spec not loaded")]
    NotLoaded,

    #[error("Spec startup already attempted (state: {state})")]
    StartupAlreadyAttempted { state: SpecState },

    #[error("Remote spec request returned status {status}")]
    RemoteStatus { status: u16 },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Remote spec body is not a valid document: {0}")]
    MalformedRemoteSpec(#[source] serde_json::Error),

    #[error("Remote spec body is an empty document")]
    EmptyRemoteSpec,

    #[error("Local spec {} could not be read: {source}", .path.display())]
    LocalSpecUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Local spec {} is not a valid document: {source}", .path.display())]
    MalformedLocalSpec {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Local spec {} is an empty document", .path.display())]
    EmptyLocalSpec { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SpecError {
    /// Faults that leave the process without a usable spec.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SpecError::LocalSpecUnavailable { .. }
                | SpecError::MalformedLocalSpec { .. }
                | SpecError::EmptyLocalSpec { .. }
                | SpecError::StartupAlreadyAttempted { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpecError::NotLoaded => "Run startup to completion before serving requests",
            SpecError::StartupAlreadyAttempted { .. } => {
                "Startup runs once per process; restart the process to retry"
            }
            SpecError::RemoteStatus { .. }
            | SpecError::Http(_)
            | SpecError::Transport { .. }
            | SpecError::MalformedRemoteSpec(_)
            | SpecError::EmptyRemoteSpec => "Check the remote spec URL and network connectivity",
            SpecError::LocalSpecUnavailable { .. } => {
                "Check that the bundled spec file exists and is readable"
            }
            SpecError::MalformedLocalSpec { .. } | SpecError::EmptyLocalSpec { .. } => {
                "Replace the bundled spec file with a valid JSON OpenAPI document"
            }
            SpecError::IoError(_) => "Check file permissions and paths",
            SpecError::ConfigError { .. } | SpecError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
