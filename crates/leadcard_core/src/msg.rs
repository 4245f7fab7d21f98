#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Values read from storage and the location at startup.
    Restore(crate::StartupState),
    /// Raw CSV text arrived (empty when loading failed).
    DatasetLoaded(String),
    PreviousClicked,
    NextClicked,
    FirstClicked,
    LastClicked,
    /// User edited the jump-to-position box.
    JumpInputChanged(String),
    /// User submitted the jump-to-position box (1-based).
    JumpSubmitted,
    /// User picked an industry; `None` or blank clears the filter.
    FilterSelected(Option<String>),
    /// Cycle forward through "all industries" and each industry in order.
    NextIndustry,
    PreviousIndustry,
    /// User closed the parse-error banner.
    AdvisoryDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unrecognised input.
    NoOp,
}
