//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Event reader thread: forwards crossterm key and resize events
//! - Ticker thread: sends a Tick at a fixed rate for the animation and
//!   the pick countdown
//! The event loop consumes from the channel, dispatching to pure handlers.
//! Dropping the receiver on exit is what stops both producers: their
//! next send fails and they return.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::facts::FactSet;
use crate::i18n::Locale;

use super::state::{Action, App, AppEvent, Focus, Transition};
use super::update::{tick_pick, update};
use super::view::render;

/// Tick period: roughly 30 frames per second. Nine ticks at this rate
/// make up the pick delay.
const TICK_RATE: Duration = Duration::from_millis(33);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The mapping depends on which control owns the keyboard: while the
/// search input has focus, printable keys edit the term and the global
/// single-letter shortcuts are suspended. Ctrl+C and Tab work anywhere.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    // Tab always moves focus, even mid-edit
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        return Some(Action::FocusNext);
    }

    match focus {
        Focus::SearchInput => match key.code {
            KeyCode::Esc | KeyCode::Up => Some(Action::LeaveSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchChar(c)),
            _ => None,
        },
        Focus::RandomButton => match key.code {
            // The pick
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PickRandom),

            // Navigation
            KeyCode::Char('/') | KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusSearch),

            // Language
            KeyCode::Char('1') => Some(Action::SetLocale(Locale::En)),
            KeyCode::Char('2') => Some(Action::SetLocale(Locale::Ar)),
            KeyCode::Char('3') => Some(Action::SetLocale(Locale::Fr)),
            KeyCode::Char('l') => Some(Action::CycleLocale),

            KeyCode::Char('q') => Some(Action::Quit),

            _ => None,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards the relevant
/// ones (keys, resizes) to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    if tx.send(AppEvent::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(_) => {} // ignore mouse, focus, paste
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that emits a Tick at a fixed rate until the receiver
/// goes away.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_RATE);
            if tx.send(AppEvent::Tick).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the producer threads, and consumes events until quit.
pub fn run(facts: FactSet, locale: Locale, seed: u64) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let size = terminal.size()?;
    let mut app = App::new(facts, locale, seed, (size.width, size.height));
    let mut rng = rand::rng();

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn producer threads
    spawn_event_reader(tx.clone());
    spawn_ticker(tx);

    loop {
        // Check quit flag
        if app.should_quit {
            break;
        }

        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key, app.ui.focus) {
                    let ui = std::mem::take(&mut app.ui);
                    match update(ui, &action, &app.facts) {
                        Transition::Ui(next) => app.ui = next,
                        Transition::Quit => app.should_quit = true,
                    }
                }
            }
            AppEvent::Tick => {
                app.ticks += 1;
                app.sky.advance();
                // The delay elapsing is the only place a fact gets drawn.
                if tick_pick(&mut app.ui) {
                    app.ui.current_fact = Some(app.facts.random_index(&mut rng));
                }
            }
            AppEvent::Resize(width, height) => {
                app.sky.resize(width, height);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit_in_both_zones() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, Focus::RandomButton), Some(Action::Quit));
        assert_eq!(map_key(key, Focus::SearchInput), Some(Action::Quit));
    }

    #[test]
    fn tab_moves_focus_in_both_zones() {
        assert_eq!(
            map_key(plain(KeyCode::Tab), Focus::RandomButton),
            Some(Action::FocusNext)
        );
        assert_eq!(
            map_key(plain(KeyCode::Tab), Focus::SearchInput),
            Some(Action::FocusNext)
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                Focus::SearchInput
            ),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn enter_and_space_pick_on_the_button() {
        assert_eq!(
            map_key(plain(KeyCode::Enter), Focus::RandomButton),
            Some(Action::PickRandom)
        );
        assert_eq!(
            map_key(plain(KeyCode::Char(' ')), Focus::RandomButton),
            Some(Action::PickRandom)
        );
    }

    #[test]
    fn slash_jumps_to_search() {
        assert_eq!(
            map_key(plain(KeyCode::Char('/')), Focus::RandomButton),
            Some(Action::FocusSearch)
        );
    }

    #[test]
    fn number_keys_select_locales_on_the_button() {
        assert_eq!(
            map_key(plain(KeyCode::Char('1')), Focus::RandomButton),
            Some(Action::SetLocale(Locale::En))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('2')), Focus::RandomButton),
            Some(Action::SetLocale(Locale::Ar))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('3')), Focus::RandomButton),
            Some(Action::SetLocale(Locale::Fr))
        );
    }

    #[test]
    fn l_cycles_the_locale_on_the_button() {
        assert_eq!(
            map_key(plain(KeyCode::Char('l')), Focus::RandomButton),
            Some(Action::CycleLocale)
        );
    }

    #[test]
    fn printable_keys_edit_the_term_in_search() {
        assert_eq!(
            map_key(plain(KeyCode::Char('x')), Focus::SearchInput),
            Some(Action::SearchChar('x'))
        );
        // Shortcut letters lose their meaning mid-edit.
        assert_eq!(
            map_key(plain(KeyCode::Char('q')), Focus::SearchInput),
            Some(Action::SearchChar('q'))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('1')), Focus::SearchInput),
            Some(Action::SearchChar('1'))
        );
    }

    #[test]
    fn esc_up_and_backspace_work_in_search() {
        assert_eq!(
            map_key(plain(KeyCode::Esc), Focus::SearchInput),
            Some(Action::LeaveSearch)
        );
        assert_eq!(
            map_key(plain(KeyCode::Up), Focus::SearchInput),
            Some(Action::LeaveSearch)
        );
        assert_eq!(
            map_key(plain(KeyCode::Backspace), Focus::SearchInput),
            Some(Action::SearchBackspace)
        );
    }

    #[test]
    fn q_quits_only_on_the_button() {
        assert_eq!(
            map_key(plain(KeyCode::Char('q')), Focus::RandomButton),
            Some(Action::Quit)
        );
        assert_ne!(
            map_key(plain(KeyCode::Char('q')), Focus::SearchInput),
            Some(Action::Quit)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(map_key(plain(KeyCode::F(5)), Focus::RandomButton), None);
        assert_eq!(map_key(plain(KeyCode::Char('z')), Focus::RandomButton), None);
        assert_eq!(map_key(plain(KeyCode::Left), Focus::SearchInput), None);
    }
}
