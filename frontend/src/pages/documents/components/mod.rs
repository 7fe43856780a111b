pub mod filters;
pub mod table;

pub use filters::DocumentFilters;
pub use table::DocumentsTable;
