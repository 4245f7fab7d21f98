//! Leadcard core: pure state machine, CSV ingestion and view-model helpers.
mod effect;
mod filter;
mod location;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{active_records, industries, normalize_filter};
pub use location::{industry_from_location, location_with_industry, INDUSTRY_PARAM};
pub use msg::Msg;
pub use record::{dial_digits, format_phone, parse_dataset, BusinessRecord, ParsedDataset, RowError};
pub use state::{AppState, Lifecycle, StartupState, ViewState};
pub use update::{cycle_industry, parse_jump, update};
pub use view_model::{Advisory, AppViewModel, CardBody, Position, RecordCard, WebsiteLink};
