pub mod args;
pub mod controller;
pub mod entry;
pub mod error;
pub mod model;
pub mod score;
pub mod view;

pub use controller::AppState;
pub use entry::EntrySession;
