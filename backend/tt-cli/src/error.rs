use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tt_client::ClientError;
use tt_config::ConfigError;
use tt_core::CoreError;
use tt_session::SessionError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Document {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line printed after `Error: ` on stderr.
    ///
    /// Session failures collapse to their user-facing wording; everything
    /// else prints in full.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session { source, .. } => match source {
                SessionError::Storage { .. }
                | SessionError::CorruptSession { .. }
                | SessionError::Document { .. } => source.to_string(),
                _ => source.user_message().to_string(),
            },
            Self::Client {
                source: ClientError::MissingToken { .. },
                ..
            } => String::from("Not logged in. Run `taxtrack login` first."),
            other => other.to_string(),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
