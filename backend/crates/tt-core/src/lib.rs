pub mod catalog;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use catalog::client_directory::ClientDirectory;
pub use catalog::meeting_schedule::MeetingSchedule;
pub use catalog::signature_book::SignatureBook;
pub use error::{CoreError, Result};
pub use models::client_record::ClientRecord;
pub use models::client_status::ClientStatus;
pub use models::document_status::DocumentStatus;
pub use models::login_response::LoginResponse;
pub use models::meeting::Meeting;
pub use models::meeting_status::MeetingStatus;
pub use models::session_token::SessionToken;
pub use models::signature_document::SignatureDocument;
pub use models::user::User;
