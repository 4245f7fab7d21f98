mod common;

use common::{business_name, hydrated, init_logging, LEADS_CSV};
use leadcard_core::{update, CardBody, Effect, Msg};
use pretty_assertions::assert_eq;

#[test]
fn next_and_previous_move_one_row() {
    init_logging();
    let state = hydrated(LEADS_CSV);

    let (state, effects) = update(state, Msg::NextClicked);
    assert_eq!(state.index(), 1);
    assert_eq!(business_name(&state).as_deref(), Some("Bright Dental"));
    assert_eq!(
        effects,
        vec![Effect::PersistView {
            index: Some(1),
            industry: None,
        }]
    );

    let (state, _) = update(state, Msg::PreviousClicked);
    assert_eq!(state.index(), 0);
}

#[test]
fn previous_at_first_row_is_noop() {
    init_logging();
    let mut state = hydrated(LEADS_CSV);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::PreviousClicked);

    assert_eq!(state.index(), 0);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(!state.view().can_go_previous);
}

#[test]
fn next_at_last_row_is_noop() {
    init_logging();
    let (state, _) = update(hydrated(LEADS_CSV), Msg::LastClicked);
    assert_eq!(state.index(), 3);
    assert!(!state.view().can_go_next);

    let (state, effects) = update(state, Msg::NextClicked);

    assert_eq!(state.index(), 3);
    assert!(effects.is_empty());
}

#[test]
fn index_never_leaves_bounds() {
    init_logging();
    let mut state = hydrated(LEADS_CSV);
    for _ in 0..10 {
        state = update(state, Msg::NextClicked).0;
        assert!(state.index() < 4);
    }
    for _ in 0..10 {
        state = update(state, Msg::PreviousClicked).0;
    }
    assert_eq!(state.index(), 0);
}

#[test]
fn first_and_last_jump_to_edges() {
    let (state, _) = update(hydrated(LEADS_CSV), Msg::LastClicked);
    assert_eq!(business_name(&state).as_deref(), Some("Best Pipes"));

    let (state, effects) = update(state, Msg::FirstClicked);
    assert_eq!(state.index(), 0);
    assert_eq!(effects.len(), 1);
}

fn jump(state: leadcard_core::AppState, input: &str) -> (leadcard_core::AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::JumpInputChanged(input.to_string()));
    update(state, Msg::JumpSubmitted)
}

#[test]
fn jump_rejects_out_of_range_positions() {
    init_logging();
    let (state, _) = update(hydrated(LEADS_CSV), Msg::NextClicked);

    let (state, effects) = jump(state, "0");
    assert_eq!(state.index(), 1);
    assert!(effects.is_empty());

    let (state, effects) = jump(state, "5");
    assert_eq!(state.index(), 1);
    assert!(effects.is_empty());
}

#[test]
fn jump_rejects_non_numeric_input_and_clears_it() {
    let (state, _) = update(hydrated(LEADS_CSV), Msg::JumpInputChanged("two".to_string()));
    assert_eq!(state.jump_input(), "two");

    let (state, effects) = update(state, Msg::JumpSubmitted);

    assert_eq!(state.index(), 0);
    assert_eq!(state.jump_input(), "");
    assert!(effects.is_empty());
}

#[test]
fn jump_is_one_based() {
    let (state, _) = update(hydrated(LEADS_CSV), Msg::LastClicked);

    let (state, effects) = jump(state, "1");
    assert_eq!(state.index(), 0);
    assert_eq!(
        effects,
        vec![Effect::PersistView {
            index: Some(0),
            industry: None,
        }]
    );

    let (state, _) = jump(state, " 4 ");
    assert_eq!(state.index(), 3);
    assert_eq!(state.jump_input(), "");
}

#[test]
fn empty_subsequence_disables_navigation() {
    init_logging();
    let (state, _) = update(
        hydrated(LEADS_CSV),
        Msg::FilterSelected(Some("Roofing".to_string())),
    );
    let view = state.view();
    assert_eq!(view.body, CardBody::Empty);
    assert_eq!(view.position, None);
    assert!(!view.can_go_previous);
    assert!(!view.can_go_next);

    let (state, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty());
    let (_, effects) = jump(state, "1");
    assert!(effects.is_empty());
}

#[test]
fn navigation_is_ignored_before_hydration() {
    let (state, effects) = update(leadcard_core::AppState::new(), Msg::NextClicked);

    assert_eq!(state.index(), 0);
    assert!(effects.is_empty());
    assert_eq!(state.view().body, CardBody::Loading);
}
