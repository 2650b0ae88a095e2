pub mod entry;
pub mod stats;

use std::sync::Mutex;

use crate::entry::EntrySession;

/// Shared application state. The entry session assumes a single writer;
/// the lock is the mutual-exclusion boundary around every transition.
pub struct AppState {
    pub session: Mutex<EntrySession>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Mutex::new(EntrySession::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
