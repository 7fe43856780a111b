pub mod audit_log;
pub mod dashboard;
pub mod document_verify;
pub mod documents;
pub mod extract;
pub mod login;
pub mod users;
