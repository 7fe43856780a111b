pub mod csv;
pub mod detail;
pub mod download;
pub mod navigation;
pub mod time;
