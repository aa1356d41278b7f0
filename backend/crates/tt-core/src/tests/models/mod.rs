mod client_record;
mod document_status;
mod meeting;
mod signature_document;
mod status;
mod user;
