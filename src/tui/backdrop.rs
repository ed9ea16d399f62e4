//! Paints a [`Sky`] into the terminal cell grid.
//!
//! Per-frame paint order is fixed: base clear, then nebula gradients,
//! then stars — so nebulae always sit under stars. This works directly
//! on the ratatui [`Buffer`] instead of going through a widget: the
//! gradient blends into each cell's background color, while stars claim
//! only the glyph and foreground, leaving the tint beneath visible.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::sky::{Nebula, NebulaHue, Sky, Star};

use super::theme;

/// Terminal cells are roughly twice as tall as wide; vertical distances
/// count double so gradients read as circles instead of ovals.
const CELL_ASPECT: f64 = 2.0;

/// Gradient strength at a nebula's center, fading to zero at its edge.
const NEBULA_ALPHA: f64 = 0.22;

/// Paint the whole backdrop for `area`. Content renders after this and
/// overwrites whatever cells it occupies.
pub fn render(sky: &Sky, buf: &mut Buffer, area: Rect) {
    clear(buf, area);
    for nebula in sky.nebulae() {
        paint_nebula(nebula, buf, area);
    }
    for star in sky.stars() {
        paint_star(star, buf, area);
    }
}

/// Reset every cell to a blank glyph over the base sky color.
fn clear(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(rgb(theme::SKY_BASE));
            }
        }
    }
}

/// Blend a radial gradient of the nebula's tint into the background of
/// every cell within one radius of its center.
fn paint_nebula(nebula: &Nebula, buf: &mut Buffer, area: Rect) {
    let tint = match nebula.hue {
        NebulaHue::Cyan => theme::NEBULA_CYAN,
        NebulaHue::Violet => theme::NEBULA_VIOLET,
    };
    let r = nebula.radius;
    if r <= 0.0 {
        return;
    }

    // Bounding box in cell coordinates, clipped to the area below.
    let half_h = r / CELL_ASPECT;
    let min_x = (nebula.x - r).floor() as i64;
    let max_x = (nebula.x + r).ceil() as i64;
    let min_y = (nebula.y - half_h).floor() as i64;
    let max_y = (nebula.y + half_h).ceil() as i64;

    for cy in min_y..=max_y {
        if cy < 0 || cy >= i64::from(area.height) {
            continue;
        }
        for cx in min_x..=max_x {
            if cx < 0 || cx >= i64::from(area.width) {
                continue;
            }
            let dx = (cx as f64 + 0.5) - nebula.x;
            let dy = ((cy as f64 + 0.5) - nebula.y) * CELL_ASPECT;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= r {
                continue;
            }
            let alpha = NEBULA_ALPHA * (1.0 - dist / r);
            let pos = (area.x + cx as u16, area.y + cy as u16);
            if let Some(cell) = buf.cell_mut(pos) {
                let base = match cell.bg {
                    Color::Rgb(cr, cg, cb) => (cr, cg, cb),
                    _ => theme::SKY_BASE,
                };
                cell.set_bg(Color::Rgb(
                    blend(base.0, tint.0, alpha),
                    blend(base.1, tint.1, alpha),
                    blend(base.2, tint.2, alpha),
                ));
            }
        }
    }
}

/// One star: a glyph sized by radius, white scaled by opacity. The cell
/// background is left alone so any nebula tint shows through beneath.
fn paint_star(star: &Star, buf: &mut Buffer, area: Rect) {
    if star.x < 0.0 || star.y < 0.0 {
        return;
    }
    let cx = star.x.floor() as i64;
    let cy = star.y.floor() as i64;
    if cx >= i64::from(area.width) || cy >= i64::from(area.height) {
        return;
    }
    let level = (star.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    if let Some(cell) = buf.cell_mut((area.x + cx as u16, area.y + cy as u16)) {
        cell.set_char(glyph(star.radius));
        cell.set_fg(Color::Rgb(level, level, level));
    }
}

/// Bigger stars get heavier glyphs.
fn glyph(radius: f64) -> char {
    if radius < 0.7 {
        '·'
    } else if radius < 1.4 {
        '•'
    } else {
        '✦'
    }
}

fn blend(base: u8, tint: u8, alpha: f64) -> u8 {
    (f64::from(base) + (f64::from(tint) - f64::from(base)) * alpha).round() as u8
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

// ============================================================================
// TESTS
// ============================================================================
