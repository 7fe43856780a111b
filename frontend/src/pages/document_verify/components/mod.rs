pub mod fields;
pub mod pdf_viewer;

pub use fields::VerifyFields;
pub use pdf_viewer::PdfViewer;
