pub mod filter;
pub mod table;

pub use filter::ActionFilter;
pub use table::AuditLogTable;
