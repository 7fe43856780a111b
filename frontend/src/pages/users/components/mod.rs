pub mod dialogs;
pub mod table;

pub use dialogs::{AddUserDialog, RoleDialog};
pub use table::UsersTable;
