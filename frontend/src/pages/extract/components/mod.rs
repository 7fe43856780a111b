pub mod fields;
pub mod log_window;
pub mod upload;

pub use fields::ExtractedFieldsPanel;
pub use log_window::LogWindow;
pub use upload::UploadArea;
