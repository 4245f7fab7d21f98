use leadcard_core::{Advisory, AppViewModel, CardBody, Lifecycle, RecordCard};
use url::Url;

use super::constants::RULE_WIDTH;

/// Renders the dashboard as terminal lines. No side effects.
pub fn render(view: &AppViewModel, location: &Url) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(header(view));

    if let Some(advisory) = &view.advisory {
        lines.push(advisory_line(advisory));
    }

    match &view.body {
        CardBody::Loading => lines.push("Loading leads…".to_string()),
        CardBody::Empty => lines.push(empty_message(view)),
        CardBody::Card(card) => lines.extend(card_lines(card)),
    }

    lines.push(rule(""));
    lines.push(controls_line(view));
    if !view.industries.is_empty() {
        lines.push(industries_line(view));
    }
    lines.push(format!("Location: {location}"));

    lines
}

fn header(view: &AppViewModel) -> String {
    let title = match (view.lifecycle, view.position) {
        (Lifecycle::Hydrated, Some(position)) => format!(
            "Lead {} of {}",
            format_with_commas(position.current as u64),
            format_with_commas(position.total as u64)
        ),
        (Lifecycle::Hydrated, None) => "No leads".to_string(),
        _ => "Leadcard".to_string(),
    };
    let title = match &view.selected_industry {
        Some(industry) => format!("{title} · {industry}"),
        None => title,
    };
    rule(&title)
}

fn rule(title: &str) -> String {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("── {title} ")
    };
    let used = label.chars().count();
    format!("{label}{}", "─".repeat(RULE_WIDTH.saturating_sub(used)))
}

fn advisory_line(advisory: &Advisory) -> String {
    let noun = if advisory.error_count == 1 { "row" } else { "rows" };
    match &advisory.first_error {
        Some(first) => format!(
            "! {} {noun} could not be read (first: {first}). Type 'd' to dismiss.",
            advisory.error_count
        ),
        None => format!(
            "! {} {noun} could not be read. Type 'd' to dismiss.",
            advisory.error_count
        ),
    }
}

fn empty_message(view: &AppViewModel) -> String {
    match (&view.selected_industry, view.record_total) {
        (Some(industry), total) if total > 0 => {
            format!("No leads in {industry}. Type 'f' to clear the filter.")
        }
        _ => "No leads to show. Check the CSV source.".to_string(),
    }
}

fn card_lines(card: &RecordCard) -> Vec<String> {
    let phone = match &card.phone_dial {
        Some(dial) if !card.phone_display.is_empty() => {
            format!("{} <tel:{dial}>", card.phone_display)
        }
        _ => card.phone_display.clone(),
    };
    let website = card
        .website
        .as_ref()
        .map(|link| format!("{} <{}>", link.label, link.href))
        .unwrap_or_default();

    [
        ("Business", card.business_name.as_str()),
        ("Company", card.company_name.as_str()),
        ("Industry", card.industry.as_str()),
        ("City", card.city.as_str()),
        ("Phone", phone.as_str()),
        ("Website", website.as_str()),
    ]
    .iter()
    .map(|(label, value)| field_line(label, value))
    .collect()
}

fn field_line(label: &str, value: &str) -> String {
    let value = if value.is_empty() { "—" } else { value };
    format!("{:<10}{value}", format!("{label}:"))
}

fn controls_line(view: &AppViewModel) -> String {
    format!(
        "{}  {}  [j <n>] jump  [f <industry>] filter  [h] help  [q] quit",
        button("p", "prev", view.can_go_previous),
        button("n", "next", view.can_go_next),
    )
}

fn button(key: &str, label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{key}] {label}")
    } else {
        format!("[ ] {label}")
    }
}

fn industries_line(view: &AppViewModel) -> String {
    let mut entries = Vec::with_capacity(view.industries.len() + 1);
    entries.push(mark("all", view.selected_industry.is_none()));
    for industry in &view.industries {
        let selected = view.selected_industry.as_deref() == Some(industry.as_str());
        entries.push(mark(industry, selected));
    }
    format!("Industries: {}", entries.join(" | "))
}

fn mark(label: &str, selected: bool) -> String {
    if selected {
        format!("*{label}*")
    } else {
        label.to_string()
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
