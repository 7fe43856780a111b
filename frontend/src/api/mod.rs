mod audit_log;
pub mod auth;
pub mod client;
pub mod dashboard;
mod documents;
pub mod error;
pub mod types;
mod users;

pub use client::*;
pub use error::ApiError;
pub use types::*;
