/// Side effects requested by [`crate::update`]. Only emitted once the state
/// is hydrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write position and filter to storage. `index: None` leaves the stored
    /// index untouched; `industry: None` stores the empty string.
    PersistView {
        index: Option<usize>,
        industry: Option<String>,
    },
    /// Rewrite the location query so `industry` matches the filter.
    ReplaceLocation { industry: Option<String> },
}
