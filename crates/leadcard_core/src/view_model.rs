use crate::record::{dial_digits, format_phone, BusinessRecord};
use crate::Lifecycle;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub lifecycle: Lifecycle,
    pub body: CardBody,
    pub position: Option<Position>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Rows in the whole dataset, ignoring the filter.
    pub record_total: usize,
    pub industries: Vec<String>,
    pub selected_industry: Option<String>,
    pub advisory: Option<Advisory>,
    pub jump_input: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardBody {
    /// Dataset not loaded yet.
    #[default]
    Loading,
    Card(RecordCard),
    /// Loaded, but the active subsequence has no rows.
    Empty,
}

/// 1-based position within the active subsequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

/// Non-blocking notice about rows the parser rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub error_count: usize,
    pub first_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub business_name: String,
    pub company_name: String,
    pub industry: String,
    pub city: String,
    pub phone_display: String,
    /// Digits for a `tel:` link; `None` when the number has no digits.
    pub phone_dial: Option<String>,
    pub website: Option<WebsiteLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteLink {
    pub label: String,
    pub href: String,
}

impl RecordCard {
    pub fn from_record(record: &BusinessRecord) -> Self {
        let dial = dial_digits(&record.phone_number);
        Self {
            business_name: record.business_name.clone(),
            company_name: record.company_name.clone(),
            industry: record.industry.clone(),
            city: record.city.clone(),
            phone_display: format_phone(&record.phone_number),
            phone_dial: (!dial.is_empty()).then_some(dial),
            website: WebsiteLink::from_site_url(&record.site_url),
        }
    }
}

impl WebsiteLink {
    fn from_site_url(site_url: &str) -> Option<Self> {
        if site_url.is_empty() {
            return None;
        }
        let href = if site_url.contains("://") {
            site_url.to_string()
        } else {
            format!("https://{site_url}")
        };
        Some(Self {
            label: site_url.to_string(),
            href,
        })
    }
}
