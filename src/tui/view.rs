//! Pure rendering: map App state to ratatui widget trees.
//!
//! The backdrop paints first, straight into the cell buffer; the page
//! content then renders over it as background-less widgets, so the sky
//! stays visible between and around the text. Every label goes through
//! the locale catalog, and every paragraph takes the single app-level
//! alignment — switching to Arabic flips the whole document right-to-left.

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::i18n::{self, Locale, TextDirection};

use super::backdrop;
use super::state::{App, Focus};
use super::theme;

/// Busy indicator frames, one per tick.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Most results shown under the search box before the "more" line.
const MAX_RESULTS: usize = 6;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    backdrop::render(&app.sky, frame.buffer_mut(), area);

    let align = alignment(app.ui.locale.direction());

    let chunks = Layout::vertical([
        Constraint::Length(4), // header: title, subtitle, language selector
        Constraint::Length(2), // stats line
        Constraint::Min(0),    // random + search sections
        Constraint::Length(3), // footer + help
    ])
    .split(area);

    frame.render_widget(render_header(app, align), chunks[0]);
    frame.render_widget(render_stats(app, align), chunks[1]);
    frame.render_widget(render_sections(app, align), chunks[2]);
    frame.render_widget(render_footer(app, align), chunks[3]);
}

/// The document-level alignment: one value for the whole render pass.
fn alignment(direction: TextDirection) -> Alignment {
    match direction {
        TextDirection::RightToLeft => Alignment::Right,
        TextDirection::LeftToRight => Alignment::Left,
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// Title, subtitle, and the language selector row.
fn render_header(app: &App, align: Alignment) -> Paragraph<'static> {
    let locale = app.ui.locale;

    let mut selector: Vec<Span> = vec![Span::styled(
        format!("{}: ", i18n::translate(locale, "languages")),
        theme::STYLE_DIM,
    )];
    for l in Locale::ALL {
        let style = if l == locale {
            theme::STYLE_ACTIVE_LOCALE
        } else {
            theme::STYLE_INACTIVE_LOCALE
        };
        selector.push(Span::styled(format!(" {} ", l.label()), style));
        selector.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(Span::styled(
            i18n::translate(locale, "title"),
            theme::STYLE_TITLE,
        )),
        Line::from(Span::styled(
            i18n::translate(locale, "subtitle"),
            theme::STYLE_SUBTITLE,
        )),
        Line::from(selector),
        Line::from(""),
    ];
    Paragraph::new(lines).alignment(align)
}

// ============================================================================
// STATS LINE
// ============================================================================

/// Collection size, active language, and the (boundless) topic count.
fn render_stats(app: &App, align: Alignment) -> Paragraph<'static> {
    let locale = app.ui.locale;
    let line = Line::from(vec![
        Span::styled(app.facts.len().to_string(), theme::STYLE_STAT),
        Span::styled(
            format!(" {}   ", i18n::translate(locale, "totalFacts")),
            theme::STYLE_DIM,
        ),
        Span::styled(locale.label().to_string(), theme::STYLE_STAT),
        Span::styled(
            format!(" {}   ", i18n::translate(locale, "activeLanguage")),
            theme::STYLE_DIM,
        ),
        Span::styled("∞".to_string(), theme::STYLE_STAT),
        Span::styled(
            format!(" {}", i18n::translate(locale, "topics")),
            theme::STYLE_DIM,
        ),
    ]);
    Paragraph::new(vec![line, Line::from("")]).alignment(align)
}

// ============================================================================
// SECTIONS
// ============================================================================

/// The random-fact section followed by the search section.
fn render_sections(app: &App, align: Alignment) -> Paragraph<'static> {
    let mut lines = random_section(app);
    lines.push(Line::from(""));
    lines.extend(search_section(app));
    Paragraph::new(lines)
        .alignment(align)
        .wrap(Wrap { trim: false })
}

/// Heading, the pick button (or the busy indicator), and the fact card.
fn random_section(app: &App) -> Vec<Line<'static>> {
    let locale = app.ui.locale;
    let mut lines = vec![Line::from(Span::styled(
        i18n::translate(locale, "randomSection"),
        theme::STYLE_SECTION,
    ))];

    let button = if app.ui.is_loading() {
        let spin = SPINNER[(app.ticks as usize) % SPINNER.len()];
        Line::from(Span::styled(
            format!("{} {}", spin, i18n::translate(locale, "loadingFact")),
            theme::STYLE_LOADING,
        ))
    } else {
        let style = if app.ui.focus == Focus::RandomButton {
            theme::STYLE_FOCUS
        } else {
            theme::STYLE_INTERACTIVE
        };
        Line::from(Span::styled(
            format!("[ {} ]", i18n::translate(locale, "randomFactButton")),
            style,
        ))
    };
    lines.push(button);

    if let Some(index) = app.ui.current_fact {
        if let Some(fact) = app.facts.get(index) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("💡 "),
                Span::styled(fact.to_string(), theme::STYLE_FACT),
            ]));
        }
    }
    lines
}

/// Heading, the input line, and the filtered results (if a term is set).
fn search_section(app: &App) -> Vec<Line<'static>> {
    let locale = app.ui.locale;
    let mut lines = vec![Line::from(Span::styled(
        i18n::translate(locale, "searchSection"),
        theme::STYLE_SECTION,
    ))];

    lines.push(input_line(app));

    // Without a term there is no results section at all — not even the
    // full collection.
    if app.ui.term.trim().is_empty() {
        return lines;
    }

    lines.push(Line::from(""));
    if app.ui.results.is_empty() {
        lines.push(Line::from(Span::styled(
            i18n::translate(locale, "noResults"),
            theme::STYLE_DIM,
        )));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        i18n::found_label(locale, app.ui.results.len()),
        theme::STYLE_DIM,
    )));
    for &index in app.ui.results.iter().take(MAX_RESULTS) {
        if let Some(fact) = app.facts.get(index) {
            lines.push(Line::from(vec![
                Span::raw("🔬 "),
                Span::raw(fact.to_string()),
            ]));
        }
    }
    let hidden = app.ui.results.len().saturating_sub(MAX_RESULTS);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("...{} more", hidden),
            theme::STYLE_DIM,
        )));
    }
    lines
}

/// The search input: prompt marker, term or placeholder, block cursor.
fn input_line(app: &App) -> Line<'static> {
    let locale = app.ui.locale;
    let focused = app.ui.focus == Focus::SearchInput;
    let marker_style = if focused {
        theme::STYLE_INTERACTIVE
    } else {
        theme::STYLE_DIM
    };

    let mut spans = vec![Span::styled("> ", marker_style)];
    if app.ui.term.is_empty() {
        if focused {
            spans.push(Span::styled("▌", theme::STYLE_INTERACTIVE));
        }
        spans.push(Span::styled(
            i18n::translate(locale, "searchPlaceholder"),
            theme::STYLE_DIM,
        ));
    } else {
        spans.push(Span::raw(app.ui.term.clone()));
        if focused {
            spans.push(Span::styled("▌", theme::STYLE_INTERACTIVE));
        }
    }
    Line::from(spans)
}

// ============================================================================
// FOOTER
// ============================================================================

/// Copyright line, tagline, and the keybinding help for the focused zone.
fn render_footer(app: &App, align: Alignment) -> Paragraph<'static> {
    let locale = app.ui.locale;
    let help = match app.ui.focus {
        Focus::RandomButton => {
            "[Enter] random fact  [/] search  [1/2/3] language  [l] cycle  [Tab] switch  [q] quit"
        }
        Focus::SearchInput => "[type] filter  [Backspace] delete  [Esc] done  [Tab] switch  [^C] quit",
    };

    let lines = vec![
        Line::from(Span::styled(
            i18n::translate(locale, "footer"),
            theme::STYLE_DIM,
        )),
        Line::from(Span::styled(
            i18n::translate(locale, "tagline"),
            theme::STYLE_DIM,
        )),
        Line::from(Span::styled(help, theme::STYLE_HELP)),
    ];
    Paragraph::new(lines).alignment(align)
}

// ============================================================================
// TESTS
// ============================================================================
