use crate::core::canvas::{draw_text, Surface};
use crate::core::palette::default_style;
use crate::core::state::App;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Style;

/// Key-binding legend, redrawn at the top of every frame.
const LEGEND: &str =
    "q - quit | x - switch color | c - clear | e - erase | [ ] - pencil size | Left Click - draw | 1-8 - colors";

/// The frame buffer is a cell surface too. Writes outside the frame area
/// are silently dropped, which is the tolerance the draw primitives
/// expect from their backend.
impl Surface for Buffer {
    fn set_cell(&mut self, x: u16, y: u16, style: Style, glyph: char) {
        if let Some(cell) = self.cell_mut(Position::new(x, y)) {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let buf = frame.buffer_mut();

    // Canvas first, overlay second, so the overlay always wins its rows.
    for (&(x, y), painted) in app.canvas.cells() {
        buf.set_cell(x, y, painted.style, painted.glyph);
    }

    draw_status(buf, app);
}

/// The fixed status overlay: legend, position and size, the two color
/// swatches, and the slot/erase line. The trailing spaces matter: the
/// surface is cell-addressed, so shorter text must blank out the tail of
/// a longer previous line.
fn draw_status(surface: &mut impl Surface, app: &App) {
    let (x, y) = app.pencil.position;

    draw_text(surface, 0, 0, default_style(), LEGEND);
    draw_text(
        surface,
        0,
        1,
        default_style(),
        &format!("{}, {} | {}, {}   ", x, y, app.pencil.width, app.pencil.height),
    );

    // Both slots stay visible: primary swatch at column 0, secondary at 1.
    draw_text(surface, 0, 2, Style::new().bg(app.pencil.primary_color), " ");
    draw_text(surface, 1, 2, Style::new().bg(app.pencil.secondary_color), " ");

    draw_text(
        surface,
        0,
        3,
        default_style(),
        &format!("{} | {}   ", app.pencil.active_slot.label(), app.pencil.erase_mode),
    );
}
