pub mod auth;
pub mod list;
pub mod selection;
pub mod session;
