mod common;

use common::{business_name, hydrated, init_logging, LEADS_CSV};
use leadcard_core::{cycle_industry, update, Effect, Msg};
use pretty_assertions::assert_eq;

fn select(industry: &str) -> Msg {
    Msg::FilterSelected(Some(industry.to_string()))
}

#[test]
fn changing_filter_resets_index_once() {
    init_logging();
    let (state, _) = update(hydrated(LEADS_CSV), Msg::LastClicked);
    assert_eq!(state.index(), 3);

    let (state, effects) = update(state, select("Plumbing"));
    assert_eq!(state.index(), 0);
    assert_eq!(business_name(&state).as_deref(), Some("Acme Plumbing"));
    assert_eq!(
        effects,
        vec![
            Effect::PersistView {
                index: Some(0),
                industry: Some("Plumbing".to_string()),
            },
            Effect::ReplaceLocation {
                industry: Some("Plumbing".to_string()),
            },
        ]
    );

    let (state, _) = update(state, Msg::NextClicked);
    assert_eq!(business_name(&state).as_deref(), Some("Best Pipes"));

    // Selecting the same industry again is not a change.
    let (state, effects) = update(state, select("Plumbing"));
    assert_eq!(state.index(), 1);
    assert!(effects.is_empty());
}

#[test]
fn clearing_filter_resets_index_and_location() {
    let (state, _) = update(hydrated(LEADS_CSV), select("Plumbing"));
    let (state, _) = update(state, Msg::NextClicked);

    let (state, effects) = update(state, Msg::FilterSelected(Some("   ".to_string())));

    assert_eq!(state.filter(), None);
    assert_eq!(state.index(), 0);
    assert_eq!(
        effects,
        vec![
            Effect::PersistView {
                index: Some(0),
                industry: None,
            },
            Effect::ReplaceLocation { industry: None },
        ]
    );
}

#[test]
fn filtered_navigation_stays_inside_subsequence() {
    let (state, _) = update(hydrated(LEADS_CSV), select("Plumbing"));
    let (state, _) = update(state, Msg::NextClicked);
    let (state, effects) = update(state, Msg::NextClicked);

    assert_eq!(state.index(), 1);
    assert!(effects.is_empty());
    let view = state.view();
    let position = view.position.expect("position");
    assert_eq!((position.current, position.total), (2, 2));
    assert_eq!(view.record_total, 4);
}

#[test]
fn industry_cycle_wraps_through_all() {
    let industries = vec!["Dental".to_string(), "Plumbing".to_string()];

    assert_eq!(cycle_industry(&industries, None, true).as_deref(), Some("Dental"));
    assert_eq!(
        cycle_industry(&industries, Some("Dental"), true).as_deref(),
        Some("Plumbing")
    );
    assert_eq!(cycle_industry(&industries, Some("Plumbing"), true), None);
    assert_eq!(
        cycle_industry(&industries, None, false).as_deref(),
        Some("Plumbing")
    );
    assert_eq!(
        cycle_industry(&industries, Some("Roofing"), true).as_deref(),
        Some("Dental")
    );
    assert_eq!(cycle_industry(&[], None, true), None);
}

#[test]
fn next_industry_message_selects_and_resets() {
    let (state, _) = update(hydrated(LEADS_CSV), Msg::LastClicked);

    let (state, effects) = update(state, Msg::NextIndustry);
    assert_eq!(state.filter(), Some("Dental"));
    assert_eq!(state.index(), 0);
    assert_eq!(effects.len(), 2);

    let (state, _) = update(state, Msg::PreviousIndustry);
    assert_eq!(state.filter(), None);
}
