use crate::filter::{active_records, industries, normalize_filter};
use crate::record::{BusinessRecord, ParsedDataset, RowError};
use crate::view_model::{Advisory, AppViewModel, CardBody, Position, RecordCard};

/// Hydration progress. Storage and location writes are only allowed once
/// the state is `Hydrated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Nothing read yet.
    #[default]
    Uninitialized,
    /// Tentative position read from storage, dataset not known yet.
    Hydrating,
    /// Position validated against the loaded dataset.
    Hydrated,
}

/// Raw values gathered at startup, before the dataset is known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartupState {
    pub stored_index: Option<String>,
    pub stored_industry: Option<String>,
    pub location_industry: Option<String>,
}

impl StartupState {
    /// Tentative `(index, filter)`. The location filter wins over the stored
    /// one; when they differ the stored index belongs to another
    /// subsequence and is dropped.
    fn resolve(&self) -> (usize, Option<String>) {
        let stored_filter = normalize_filter(self.stored_industry.as_deref());
        let stored_index = self
            .stored_index
            .as_deref()
            .and_then(|text| text.trim().parse::<usize>().ok())
            .unwrap_or(0);

        match normalize_filter(self.location_industry.as_deref()) {
            Some(location) if stored_filter.as_deref() != Some(location.as_str()) => {
                (0, Some(location))
            }
            Some(location) => (stored_index, Some(location)),
            None => (stored_index, stored_filter),
        }
    }
}

/// The persisted part of the state. `index` is `None` while the active
/// subsequence is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub index: Option<usize>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    lifecycle: Lifecycle,
    records: Vec<BusinessRecord>,
    row_errors: Vec<RowError>,
    advisory_dismissed: bool,
    /// A dataset arrived, possibly before the startup values.
    dataset_received: bool,
    filter: Option<String>,
    index: usize,
    jump_input: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_hydrated(&self) -> bool {
        self.lifecycle == Lifecycle::Hydrated
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn row_errors(&self) -> &[RowError] {
        &self.row_errors
    }

    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    pub fn active_records(&self) -> Vec<&BusinessRecord> {
        active_records(&self.records, self.filter.as_deref())
    }

    pub fn active_len(&self) -> usize {
        match self.filter.as_deref() {
            Some(_) => self.active_records().len(),
            None => self.records.len(),
        }
    }

    pub fn current_record(&self) -> Option<&BusinessRecord> {
        if !self.is_hydrated() {
            return None;
        }
        self.active_records().get(self.index).copied()
    }

    pub fn industries(&self) -> Vec<String> {
        industries(&self.records)
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            index: (self.active_len() > 0).then_some(self.index),
            filter: self.filter.clone(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        let total = self.active_len();
        let body = if !self.is_hydrated() {
            CardBody::Loading
        } else {
            match self.current_record() {
                Some(record) => CardBody::Card(RecordCard::from_record(record)),
                None => CardBody::Empty,
            }
        };
        let position = match &body {
            CardBody::Card(_) => Some(Position {
                current: self.index + 1,
                total,
            }),
            CardBody::Loading | CardBody::Empty => None,
        };
        let advisory = (!self.row_errors.is_empty() && !self.advisory_dismissed).then(|| Advisory {
            error_count: self.row_errors.len(),
            first_error: self.row_errors.first().map(ToString::to_string),
        });

        AppViewModel {
            lifecycle: self.lifecycle,
            can_go_previous: position.is_some() && self.index > 0,
            can_go_next: position.is_some() && self.index + 1 < total,
            body,
            position,
            record_total: self.records.len(),
            industries: self.industries(),
            selected_industry: self.filter.clone(),
            advisory,
            jump_input: self.jump_input.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Applies tentative startup values. Only honoured once, before hydration.
    /// If the dataset is already here this also hydrates.
    pub(crate) fn restore(&mut self, startup: &StartupState) -> bool {
        if self.lifecycle != Lifecycle::Uninitialized {
            return false;
        }
        let (index, filter) = startup.resolve();
        self.index = index;
        self.filter = filter;
        self.lifecycle = Lifecycle::Hydrating;
        if self.dataset_received {
            self.hydrate();
        }
        self.mark_dirty();
        true
    }

    /// Replaces the dataset. Returns `true` when this call performed
    /// hydration. Before `restore` the dataset is only held, never hydrated,
    /// so the stored position cannot be overwritten.
    pub(crate) fn load_dataset(&mut self, parsed: ParsedDataset) -> bool {
        self.records = parsed.records;
        self.row_errors = parsed.errors;
        self.advisory_dismissed = false;
        self.dataset_received = true;
        self.mark_dirty();

        match self.lifecycle {
            Lifecycle::Uninitialized => false,
            Lifecycle::Hydrating => {
                self.hydrate();
                true
            }
            Lifecycle::Hydrated => {
                self.clamp_index();
                false
            }
        }
    }

    fn hydrate(&mut self) {
        self.clamp_index();
        self.lifecycle = Lifecycle::Hydrated;
    }

    fn clamp_index(&mut self) {
        let len = self.active_len();
        self.index = if len == 0 { 0 } else { self.index.min(len - 1) };
    }

    fn move_to(&mut self, target: usize) -> bool {
        if !self.is_hydrated() || self.active_len() == 0 || target == self.index {
            return false;
        }
        self.index = target;
        self.mark_dirty();
        true
    }

    pub(crate) fn go_previous(&mut self) -> bool {
        self.move_to(self.index.saturating_sub(1))
    }

    pub(crate) fn go_next(&mut self) -> bool {
        let last = self.active_len().saturating_sub(1);
        self.move_to((self.index + 1).min(last))
    }

    pub(crate) fn go_first(&mut self) -> bool {
        self.move_to(0)
    }

    pub(crate) fn go_last(&mut self) -> bool {
        self.move_to(self.active_len().saturating_sub(1))
    }

    /// Moves to a 0-based index the caller already validated against
    /// [`AppState::active_len`].
    pub(crate) fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.active_len() {
            return false;
        }
        self.move_to(index)
    }

    /// Switches the filter. A real change always lands on index 0; selecting
    /// the filter already in effect changes nothing.
    pub(crate) fn set_filter(&mut self, filter: Option<String>) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.index = 0;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_jump_input(&mut self, text: String) {
        if self.jump_input != text {
            self.jump_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn take_jump_input(&mut self) -> String {
        let text = std::mem::take(&mut self.jump_input);
        if !text.is_empty() {
            self.mark_dirty();
        }
        text
    }

    pub(crate) fn dismiss_advisory(&mut self) {
        if !self.advisory_dismissed && !self.row_errors.is_empty() {
            self.advisory_dismissed = true;
            self.mark_dirty();
        }
    }
}
