use leadcard_core::{location_with_industry, Effect, Msg};
use leadcard_engine::{write_stored_view, KeyValueStore, LoadEvent};
use leadcard_logging::{lead_debug, lead_info, lead_warn};
use url::Url;

/// Applies core effects to storage and the current location.
pub struct EffectRunner {
    store: Box<dyn KeyValueStore>,
    location: Url,
}

impl EffectRunner {
    pub fn new(store: Box<dyn KeyValueStore>, location: Url) -> Self {
        Self { store, location }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistView { index, industry } => {
                    lead_debug!("PersistView index={:?} industry={:?}", index, industry);
                    write_stored_view(self.store.as_mut(), index, industry.as_deref());
                }
                Effect::ReplaceLocation { industry } => {
                    let next = location_with_industry(&self.location, industry.as_deref());
                    if next != self.location {
                        lead_info!("Location {} -> {}", self.location, next);
                        self.location = next;
                    }
                }
            }
        }
    }
}

/// A failed load still hydrates the view, with an empty dataset.
pub fn map_load_event(event: LoadEvent) -> Msg {
    match event {
        LoadEvent::Finished { origin, result } => match result {
            Ok(text) => {
                if text.trim().is_empty() {
                    lead_warn!("Dataset from {} is empty", origin);
                }
                Msg::DatasetLoaded(text)
            }
            Err(err) => {
                lead_warn!("Failed to load dataset from {}: {}", origin, err);
                Msg::DatasetLoaded(String::new())
            }
        },
    }
}
