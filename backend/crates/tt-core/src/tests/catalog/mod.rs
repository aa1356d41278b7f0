mod client_directory;
mod meeting_schedule;
mod signature_book;
