use leadcard_logging::{lead_debug, lead_info};

use crate::{normalize_filter, parse_dataset, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Write-back effects are only produced after hydration, so a startup with
/// no data yet can never overwrite a saved position.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Restore(startup) => {
            if !state.restore(&startup) {
                lead_debug!("ignoring restore after startup");
                Vec::new()
            } else if state.is_hydrated() {
                hydrated(&state)
            } else {
                Vec::new()
            }
        }
        Msg::DatasetLoaded(text) => {
            let parsed = parse_dataset(&text);
            if !parsed.errors.is_empty() {
                lead_info!("CSV parse reported {} row error(s)", parsed.errors.len());
            }
            let before = state.view_state();
            let hydrated_now = state.load_dataset(parsed);
            if hydrated_now {
                hydrated(&state)
            } else if state.view_state() != before {
                write_back(&state, false)
            } else {
                Vec::new()
            }
        }
        Msg::PreviousClicked => {
            let changed = state.go_previous();
            moved(&state, changed)
        }
        Msg::NextClicked => {
            let changed = state.go_next();
            moved(&state, changed)
        }
        Msg::FirstClicked => {
            let changed = state.go_first();
            moved(&state, changed)
        }
        Msg::LastClicked => {
            let changed = state.go_last();
            moved(&state, changed)
        }
        Msg::JumpInputChanged(text) => {
            state.set_jump_input(text);
            Vec::new()
        }
        Msg::JumpSubmitted => {
            let input = state.take_jump_input();
            match parse_jump(&input, state.active_len()) {
                Some(index) => {
                    let changed = state.jump_to(index);
                    moved(&state, changed)
                }
                None => {
                    lead_debug!("rejected jump input {:?}", input);
                    Vec::new()
                }
            }
        }
        Msg::FilterSelected(filter) => select_filter(&mut state, normalize_filter(filter.as_deref())),
        Msg::NextIndustry => {
            let next = cycle_industry(&state.industries(), state.filter(), true);
            select_filter(&mut state, next)
        }
        Msg::PreviousIndustry => {
            let next = cycle_industry(&state.industries(), state.filter(), false);
            select_filter(&mut state, next)
        }
        Msg::AdvisoryDismissed => {
            state.dismiss_advisory();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Validates a 1-based jump request against `len`, returning the 0-based index.
pub fn parse_jump(input: &str, len: usize) -> Option<usize> {
    let position = input.trim().parse::<usize>().ok()?;
    (1..=len).contains(&position).then(|| position - 1)
}

/// The filter after `current` when cycling through `[None, industries..]`.
/// An unknown current filter restarts the cycle from "all industries".
pub fn cycle_industry(industries: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    let slots = industries.len() + 1;
    let position = current
        .and_then(|current| industries.iter().position(|industry| industry == current))
        .map_or(0, |index| index + 1);
    let next = if forward {
        (position + 1) % slots
    } else {
        (position + slots - 1) % slots
    };
    next.checked_sub(1).map(|index| industries[index].clone())
}

fn hydrated(state: &AppState) -> Vec<Effect> {
    lead_info!(
        "hydrated with {} record(s), index={} filter={:?}",
        state.records().len(),
        state.index(),
        state.filter()
    );
    write_back(state, true)
}

fn moved(state: &AppState, changed: bool) -> Vec<Effect> {
    if changed {
        write_back(state, false)
    } else {
        Vec::new()
    }
}

fn select_filter(state: &mut AppState, filter: Option<String>) -> Vec<Effect> {
    if !state.set_filter(filter) {
        return Vec::new();
    }
    lead_debug!("filter changed to {:?}", state.filter());
    write_back(state, true)
}

/// The single hydration guard for every storage and location write.
fn write_back(state: &AppState, relocate: bool) -> Vec<Effect> {
    if !state.is_hydrated() {
        return Vec::new();
    }
    let view = state.view_state();
    let mut effects = Vec::with_capacity(2);
    effects.push(Effect::PersistView {
        index: view.index,
        industry: view.filter.clone(),
    });
    if relocate {
        effects.push(Effect::ReplaceLocation {
            industry: view.filter,
        });
    }
    effects
}
