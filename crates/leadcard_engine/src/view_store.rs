use leadcard_logging::{lead_debug, lead_warn};

use crate::storage::{KeyValueStore, StorageError};

pub const INDEX_KEY: &str = "leadcard.index";
pub const INDUSTRY_KEY: &str = "leadcard.industry";

/// Raw stored values; interpreting them is the core's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoredView {
    pub index: Option<String>,
    pub industry: Option<String>,
}

/// Reads the stored position and filter. Unreadable keys count as absent.
pub fn read_stored_view(store: &dyn KeyValueStore) -> StoredView {
    StoredView {
        index: read_key(store, INDEX_KEY),
        industry: read_key(store, INDUSTRY_KEY),
    }
}

/// Writes position and filter. `index: None` leaves the stored index as it
/// is; no filter is stored as the empty string. Failures are logged only.
pub fn write_stored_view(store: &mut dyn KeyValueStore, index: Option<usize>, industry: Option<&str>) {
    if let Some(index) = index {
        best_effort(INDEX_KEY, store.set(INDEX_KEY, &index.to_string()));
    }
    best_effort(INDUSTRY_KEY, store.set(INDUSTRY_KEY, industry.unwrap_or_default()));
}

/// Forgets the stored position and filter.
pub fn clear_stored_view(store: &mut dyn KeyValueStore) {
    best_effort(INDEX_KEY, store.remove(INDEX_KEY));
    best_effort(INDUSTRY_KEY, store.remove(INDUSTRY_KEY));
}

fn read_key(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            lead_warn!("Failed to read {} from storage: {}", key, err);
            None
        }
    }
}

fn best_effort(key: &str, result: Result<(), StorageError>) {
    match result {
        Ok(()) => lead_debug!("stored {}", key),
        Err(err) => lead_warn!("Failed to write {} to storage: {}", key, err),
    }
}
