use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;
use tt_client::ClientError;
use tt_core::CoreError;

/// Errors from the local key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read store file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write store file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Store file corrupted at {path}: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to backup corrupted store file: {source} {location}")]
    BackupFailed {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize store contents: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::AtomicRename { .. }
                | Self::Unavailable { .. }
        )
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backup_failed(source: std::io::Error) -> Self {
        Self::BackupFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Why a session operation failed.
///
/// Login failures keep network trouble, rejected credentials and local
/// storage problems apart so callers can react to each.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Username and password are required {location}")]
    EmptyCredentials { location: ErrorLocation },

    #[error("A login is already in progress {location}")]
    LoginInProgress { location: ErrorLocation },

    #[error("Login cancelled by logout {location}")]
    LoginCancelled { location: ErrorLocation },

    #[error("Invalid username or password: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {source} {location}")]
    Network {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed server response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Stored session is corrupted: {message} {location}")]
    CorruptSession {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document error: {source} {location}")]
    Document {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn empty_credentials() -> Self {
        Self::EmptyCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_in_progress() -> Self {
        Self::LoginInProgress {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_cancelled() -> Self {
        Self::LoginCancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt_session(message: impl Into<String>) -> Self {
        Self::CorruptSession {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Sort a client error into the session's failure categories.
    #[track_caller]
    pub fn from_client(err: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if err.is_rejection() {
            let message = match err {
                ClientError::Api { message, .. } => message,
                other => other.to_string(),
            };
            return Self::InvalidCredentials { message, location };
        }

        match err {
            ClientError::Api {
                status, message, ..
            } => Self::Server {
                status,
                message,
                location,
            },
            ClientError::Json { message, .. } => Self::MalformedResponse { message, location },
            other => Self::Network {
                source: other,
                location,
            },
        }
    }

    /// One-line message suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyCredentials { .. } => "Please enter both username and password",
            Self::LoginInProgress { .. } => "A login is already in progress",
            Self::LoginCancelled { .. } => "The login was cancelled",
            Self::InvalidCredentials { .. } => "Invalid username or password",
            Self::Network { .. } => "Unable to reach the server. Check your connection and try again.",
            Self::Server { .. } | Self::MalformedResponse { .. } => {
                "The server could not complete the login. Please try again later."
            }
            Self::Storage { .. } | Self::CorruptSession { .. } => {
                "Unable to save your session on this device."
            }
            Self::Document { .. } => "That document cannot be signed.",
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
