use leadcard_core::{industry_from_location, StartupState};
use leadcard_engine::{
    clear_stored_view, read_stored_view, FileStore, KeyValueStore, MemoryStore,
};
use leadcard_logging::lead_info;
use url::Url;

use super::config::StoreChoice;

pub(crate) fn open_store(choice: &StoreChoice) -> Box<dyn KeyValueStore> {
    match choice {
        StoreChoice::File(path) => {
            lead_info!("Using storage file {:?}", path);
            Box::new(FileStore::new(path.clone()))
        }
        StoreChoice::Memory => {
            lead_info!("Using in-memory storage");
            Box::new(MemoryStore::new())
        }
    }
}

pub(crate) fn reset_store(store: &mut dyn KeyValueStore) {
    lead_info!("Clearing stored position and filter");
    clear_stored_view(store);
}

/// Tentative state read before the dataset is known.
pub(crate) fn startup_state(store: &dyn KeyValueStore, location: &Url) -> StartupState {
    let stored = read_stored_view(store);
    let startup = StartupState {
        stored_index: stored.index,
        stored_industry: stored.industry,
        location_industry: industry_from_location(location),
    };
    lead_info!(
        "Startup state: index={:?} stored_industry={:?} location_industry={:?}",
        startup.stored_index,
        startup.stored_industry,
        startup.location_industry
    );
    startup
}
