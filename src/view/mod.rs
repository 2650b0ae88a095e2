pub mod entry;
pub mod layout;
pub mod stats;
