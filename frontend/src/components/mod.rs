pub mod badges;
pub mod detail_modal;
pub mod error;
pub mod guard;
pub mod layout;
pub mod pagination;
