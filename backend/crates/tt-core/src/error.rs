use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid client status: {value} {location}")]
    InvalidClientStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid meeting status: {value} {location}")]
    InvalidMeetingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document status: {value} {location}")]
    InvalidDocumentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Document not found: {id} {location}")]
    DocumentNotFound { id: String, location: ErrorLocation },

    #[error("Document already signed: {id} {location}")]
    DocumentAlreadySigned { id: String, location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn document_not_found(id: impl Into<String>) -> Self {
        Self::DocumentNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn document_already_signed(id: impl Into<String>) -> Self {
        Self::DocumentAlreadySigned {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
