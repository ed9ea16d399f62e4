//! TUI color semantics and style constants.
//!
//! Centralized theme definitions — pure data consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - Light blue: identity (title, active language)
//! - Cyan: interactive elements (button, search prompt, focus)
//! - Yellow: busy (the pick countdown)
//! - White bold: headings and statistic values
//! - Dim: de-emphasized (captions, placeholder ghost text, footer)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Page title.
pub const STYLE_TITLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

/// Subtitle under the page title.
pub const STYLE_SUBTITLE: Style = Style::new().fg(Color::Gray);

/// Section headings.
pub const STYLE_SECTION: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// The control that currently owns the keyboard.
pub const STYLE_FOCUS: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

/// Busy indicator while a pick is in flight — yellow.
pub const STYLE_LOADING: Style = Style::new().fg(Color::Yellow);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// The active language in the selector.
pub const STYLE_ACTIVE_LOCALE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

/// Inactive languages in the selector.
pub const STYLE_INACTIVE_LOCALE: Style = Style::new().fg(Color::DarkGray);

/// Statistic values on the stats line.
pub const STYLE_STAT: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD);

/// The fact card text.
pub const STYLE_FACT: Style = Style::new().fg(Color::White);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// BACKDROP PALETTE
// ============================================================================

/// Base background of the sky, a deep space blue.
pub const SKY_BASE: (u8, u8, u8) = (9, 11, 26);

/// Cyan nebula tint.
pub const NEBULA_CYAN: (u8, u8, u8) = (34, 211, 238);

/// Violet nebula tint.
pub const NEBULA_VIOLET: (u8, u8, u8) = (168, 85, 247);

// ============================================================================
// TESTS
// ============================================================================
