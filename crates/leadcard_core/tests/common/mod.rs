#![allow(dead_code)]

use std::sync::Once;

use leadcard_core::{update, AppState, Effect, Msg, StartupState};

pub const LEADS_CSV: &str = "\
Site URL,Business Name,Industry,Company Name,City,Phone Number
acme.example,Acme Plumbing,Plumbing,Acme LLC,Austin,5551234567
,Bright Dental,Dental,,Dallas,
,,,,Houston,
,,,,,555-CALL-NOW
best.example,Best Pipes,Plumbing,Best Co,Waco,(555) 987-6543
";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(leadcard_logging::initialize_for_tests);
}

pub fn startup(index: Option<&str>, industry: Option<&str>, location: Option<&str>) -> StartupState {
    StartupState {
        stored_index: index.map(ToOwned::to_owned),
        stored_industry: industry.map(ToOwned::to_owned),
        location_industry: location.map(ToOwned::to_owned),
    }
}

/// Restores `startup`, then loads `csv`, returning the hydrated state and
/// the effects of the hydrating message.
pub fn hydrate(startup: StartupState, csv: &str) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(AppState::new(), Msg::Restore(startup));
    assert!(effects.is_empty());
    update(state, Msg::DatasetLoaded(csv.to_string()))
}

pub fn hydrated(csv: &str) -> AppState {
    hydrate(StartupState::default(), csv).0
}

pub fn business_name(state: &AppState) -> Option<String> {
    state.current_record().map(|record| record.business_name.clone())
}
