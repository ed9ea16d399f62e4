//! Pure state transitions: (UiState, Action) → Transition.
//!
//! This is the whole controller, fully testable without a terminal.
//! Term edits recompute the filtered indices on the spot — nothing else
//! ever touches them, so the stored result can never go stale against
//! the term or the (immutable) collection it was derived from.

use crate::facts::FactSet;
use crate::search;

use super::state::{Action, Focus, PickState, Transition, UiState, PICK_DELAY_TICKS};

/// Pure state transition function.
///
/// Given the interface state, an action, and a read-only view of the
/// fact collection, produces the next transition. The effects boundary
/// interprets the result.
pub fn update(mut ui: UiState, action: &Action, facts: &FactSet) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::FocusNext => ui.focus = ui.focus.next(),
        Action::FocusSearch => ui.focus = Focus::SearchInput,
        Action::LeaveSearch => ui.focus = Focus::RandomButton,
        Action::PickRandom => start_pick(&mut ui),
        Action::SearchChar(c) => push_term_char(&mut ui, facts, *c),
        Action::SearchBackspace => pop_term_char(&mut ui, facts),
        Action::SetLocale(locale) => ui.locale = *locale,
        Action::CycleLocale => ui.locale = ui.locale.next(),
    }
    Transition::Ui(ui)
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Arm the pick countdown — unless one is already in flight, in which
/// case the request is dropped (no queueing, no restart).
fn start_pick(ui: &mut UiState) {
    if !ui.is_loading() {
        ui.pick = PickState::Pending {
            ticks_left: PICK_DELAY_TICKS,
        };
    }
}

fn push_term_char(ui: &mut UiState, facts: &FactSet, c: char) {
    ui.term.push(c);
    ui.results = search::matching_indices(facts.all(), &ui.term);
}

fn pop_term_char(ui: &mut UiState, facts: &FactSet) {
    if ui.term.pop().is_some() {
        ui.results = search::matching_indices(facts.all(), &ui.term);
    }
}

// ============================================================================
// TICK PATH
// ============================================================================

/// Advance the pick countdown by one tick.
///
/// Returns true exactly once per pick, on the tick the delay elapses;
/// the caller then draws the random index and stores the result. A
/// dropped countdown (app exit) simply never fires.
pub fn tick_pick(ui: &mut UiState) -> bool {
    match ui.pick {
        PickState::Idle => false,
        PickState::Pending { ticks_left } => {
            let left = ticks_left.saturating_sub(1);
            if left == 0 {
                ui.pick = PickState::Idle;
                true
            } else {
                ui.pick = PickState::Pending { ticks_left: left };
                false
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
