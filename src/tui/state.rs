//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. Illegal states should
//! be unrepresentable: the loading flag IS the pick countdown, so the
//! flag and the countdown cannot disagree. The transition function and
//! rendering layer both program against these types.
//!
//! Design principle: everything the user can change lives in [`UiState`],
//! which the update function takes by value and hands back. Shared
//! immutable data (the fact collection) and the backdrop simulation live
//! in [`App`].

use crossterm::event::KeyEvent;

use crate::facts::FactSet;
use crate::i18n::Locale;
use crate::sky::Sky;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A reader thread forwards terminal `Key` and `Resize` events
/// - A ticker thread sends `Tick` at a fixed rate
///
/// The event loop dispatches: Key events go through `map_key → update`,
/// ticks drive the backdrop and the pick countdown.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// One animation / countdown step.
    Tick,
    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),
}

// ============================================================================
// PICK COUNTDOWN
// ============================================================================

/// Ticks a pick waits before resolving. Nine ticks at the 33ms tick rate
/// is roughly 300ms — enough for the busy state to be visible.
pub const PICK_DELAY_TICKS: u8 = 9;

/// Lifecycle of the random pick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickState {
    /// No pick in flight.
    #[default]
    Idle,
    /// Counting down to the random selection.
    Pending { ticks_left: u8 },
}

// ============================================================================
// FOCUS
// ============================================================================

/// Which control currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The random-fact button; single-letter shortcuts work here.
    #[default]
    RandomButton,
    /// The search input; printable keys edit the term.
    SearchInput,
}

impl Focus {
    /// The other zone (there are only two).
    pub fn next(self) -> Focus {
        match self {
            Focus::RandomButton => Focus::SearchInput,
            Focus::SearchInput => Focus::RandomButton,
        }
    }
}

// ============================================================================
// UI STATE
// ============================================================================

/// Everything the user can change.
#[derive(Debug, PartialEq, Default)]
pub struct UiState {
    /// Focused control.
    pub focus: Focus,
    /// Active locale — drives every label and the layout direction.
    pub locale: Locale,
    /// Current search term, updated on every keystroke.
    pub term: String,
    /// Indices of facts matching the term, recomputed when the term changes.
    pub results: Vec<usize>,
    /// Index of the fact on display, once a pick has completed.
    pub current_fact: Option<usize>,
    /// Pick countdown; doubles as the loading flag.
    pub pick: PickState,
}

impl UiState {
    /// Fresh state in the given locale.
    pub fn new(locale: Locale) -> Self {
        UiState {
            locale,
            ..UiState::default()
        }
    }

    /// True while a pick is counting down.
    pub fn is_loading(&self) -> bool {
        matches!(self.pick, PickState::Pending { .. })
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the shared data (the fact collection), the backdrop simulation,
/// and the user-changeable state. The effects layer reads this to know
/// what to render.
#[derive(Debug)]
pub struct App {
    /// The immutable fact collection. Non-empty by construction.
    pub facts: FactSet,
    /// The ambient backdrop simulation.
    pub sky: Sky,
    /// User-changeable interface state.
    pub ui: UiState,
    /// Ticks seen so far; drives the busy spinner frame.
    pub ticks: u64,
    /// Set to true when the app should exit on the next loop turn.
    pub should_quit: bool,
}

impl App {
    /// Assemble the model for a terminal surface of the given size.
    pub fn new(facts: FactSet, locale: Locale, seed: u64, size: (u16, u16)) -> Self {
        App {
            facts,
            sky: Sky::new(size.0, size.1, seed),
            ui: UiState::new(locale),
            ticks: 0,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move focus to the other control.
    FocusNext,
    /// Jump straight to the search input.
    FocusSearch,
    /// Return focus to the random-fact button.
    LeaveSearch,
    /// Start a random pick (ignored while one is in flight).
    PickRandom,
    /// Append a character to the search term.
    SearchChar(char),
    /// Delete the last character of the search term.
    SearchBackspace,
    /// Switch to a specific locale.
    SetLocale(Locale),
    /// Switch to the next locale in selector order.
    CycleLocale,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary inspects it.
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// effectful code decides HOW. Randomness and time stay on the tick path
/// in the run loop, so every action resolves to new state or to quitting.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Adopt this interface state.
    Ui(UiState),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
