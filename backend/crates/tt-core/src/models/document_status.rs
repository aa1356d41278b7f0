use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Signature state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    /// Waiting for the client's signature
    #[default]
    #[serde(rename = "Pending Signature")]
    PendingSignature,
    Signed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingSignature => "Pending Signature",
            Self::Signed => "Signed",
        }
    }

    pub fn requires_signature(&self) -> bool {
        matches!(self, Self::PendingSignature)
    }
}

impl FromStr for DocumentStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending signature" | "pending_signature" | "pending" => Ok(Self::PendingSignature),
            "signed" => Ok(Self::Signed),
            _ => Err(CoreError::InvalidDocumentStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
