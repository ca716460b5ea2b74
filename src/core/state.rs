//! # Application State
//!
//! Core painting state for cellbrush. This module contains domain logic
//! only, no TUI-specific types. Rendering lives in the `tui` module.
//!
//! ```text
//! App
//! ├── palette: Palette        // digit-to-color table, fixed at startup
//! ├── pencil: PencilState     // position, footprint, slots, modes
//! └── canvas: Canvas          // every cell painted so far
//!
//! PencilState
//! ├── position: (u16, u16)    // last pointer cell
//! ├── width, height: u16      // square stroke footprint, >= 1
//! ├── erase_mode: bool        // strokes revert cells instead of painting
//! ├── active_slot: Slot       // which register digit presses target
//! ├── primary_color: Color
//! ├── secondary_color: Color
//! └── style: Style            // derived, bg = active slot's color
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! Every mutator that touches a color or the slot re-derives `style`
//! before returning, so it is never stale.

use ratatui::style::{Color, Style};

use crate::core::canvas::Canvas;
use crate::core::config::ResolvedConfig;
use crate::core::palette::{Palette, Slot};

/// Current painting configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PencilState {
    /// Last known pointer cell, updated only on pointer events.
    pub position: (u16, u16),
    /// Stroke footprint. Width and height always move together and never
    /// drop below 1.
    pub width: u16,
    pub height: u16,
    /// When set, strokes revert cells to the default background.
    pub erase_mode: bool,
    /// Which color register digit presses currently modify.
    pub active_slot: Slot,
    pub primary_color: Color,
    pub secondary_color: Color,
    /// Display style of the pencil: background is the active slot's
    /// color, foreground a fixed contrasting black.
    pub style: Style,
}

impl PencilState {
    pub fn new(default_color: Color) -> Self {
        let mut pencil = Self {
            position: (0, 0),
            width: 1,
            height: 1,
            erase_mode: false,
            active_slot: Slot::Primary,
            primary_color: default_color,
            secondary_color: default_color,
            style: Style::new(),
        };
        pencil.refresh_style();
        pencil
    }

    /// The color held by the currently active slot.
    pub fn active_color(&self) -> Color {
        match self.active_slot {
            Slot::Primary => self.primary_color,
            Slot::Secondary => self.secondary_color,
        }
    }

    /// Assign a color to the active slot.
    pub fn set_active_color(&mut self, color: Color) {
        match self.active_slot {
            Slot::Primary => self.primary_color = color,
            Slot::Secondary => self.secondary_color = color,
        }
        self.refresh_style();
    }

    /// Toggle Primary and Secondary.
    pub fn swap_slot(&mut self) {
        self.active_slot = self.active_slot.toggled();
        self.refresh_style();
    }

    pub fn toggle_erase(&mut self) {
        self.erase_mode = !self.erase_mode;
    }

    /// Increase the footprint by one in both directions. No upper bound.
    pub fn grow(&mut self) {
        self.width = self.width.saturating_add(1);
        self.height = self.height.saturating_add(1);
    }

    /// Decrease the footprint by one in both directions, flooring at 1x1.
    pub fn shrink(&mut self) {
        if self.width > 1 && self.height > 1 {
            self.width -= 1;
            self.height -= 1;
        }
    }

    fn refresh_style(&mut self) {
        self.style = Style::new().bg(self.active_color()).fg(Color::Black);
    }
}

pub struct App {
    pub palette: Palette,
    pub pencil: PencilState,
    pub canvas: Canvas,
}

impl App {
    pub fn new(palette: Palette) -> Self {
        let pencil = PencilState::new(palette.default_color());
        Self {
            palette,
            pencil,
            canvas: Canvas::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.palette.clone())
    }
}
