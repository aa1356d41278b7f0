pub mod client_record;
pub mod client_status;
pub mod document_status;
pub mod login_response;
pub mod meeting;
pub mod meeting_status;
pub mod session_token;
pub mod signature_document;
pub mod user;
