//! # Actions
//!
//! Everything that can happen in cellbrush becomes an `Action`.
//! User presses `]`? That's `Action::Grow`.
//! Pointer drags with the primary button held? That's `Action::Pointer`
//! with `paint` set.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place, returning an `Effect` for the few cases
//! the loop itself must act on (quitting). No I/O happens here.
//!
//! ```text
//! State + Action  ->  update()  ->  New State (+ Effect)
//! ```
//!
//! This makes the whole interpreter testable without a terminal:
//! feed actions, assert on `App`.

use crate::core::canvas::draw_box;
use crate::core::state::App;

/// Everything the paint session can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit key `'1'..'8'`: assign that table color to the active slot.
    PickColor(char),
    /// Toggle which slot digit presses target.
    SwapSlot,
    /// Flip erase mode.
    ToggleErase,
    /// Widen the pencil footprint by one in both directions.
    Grow,
    /// Narrow the pencil footprint by one, flooring at 1x1.
    Shrink,
    /// Revert the whole canvas to the default background.
    ClearCanvas,
    /// End the session.
    Quit,
    /// Pointer moved to `(x, y)`. With `paint` set (primary button held),
    /// stamp the pencil footprint there as well.
    Pointer { x: u16, y: u16, paint: bool },
}

/// What the event loop must do after a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The fixed key-binding table. Unmapped keys are not errors, they are
/// simply not bindings.
pub fn key_action(key: char) -> Option<Action> {
    match key {
        '1'..='8' => Some(Action::PickColor(key)),
        'x' | 'X' => Some(Action::SwapSlot),
        'q' | 'Q' => Some(Action::Quit),
        'c' | 'C' => Some(Action::ClearCanvas),
        'e' => Some(Action::ToggleErase),
        ']' => Some(Action::Grow),
        '[' => Some(Action::Shrink),
        _ => None,
    }
}

/// Apply one action to the session state.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PickColor(key) => {
            if let Some(color) = app.palette.color_for(key) {
                app.pencil.set_active_color(color);
            }
            Effect::None
        }
        Action::SwapSlot => {
            app.pencil.swap_slot();
            Effect::None
        }
        Action::ToggleErase => {
            app.pencil.toggle_erase();
            Effect::None
        }
        Action::Grow => {
            app.pencil.grow();
            Effect::None
        }
        Action::Shrink => {
            app.pencil.shrink();
            Effect::None
        }
        Action::ClearCanvas => {
            app.canvas.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::Pointer { x, y, paint } => {
            app.pencil.position = (x, y);
            if paint {
                let (width, height) = (app.pencil.width, app.pencil.height);
                if app.pencil.erase_mode {
                    app.canvas.erase_rect(x, y, width, height);
                } else {
                    draw_box(&mut app.canvas, x, y, width, height, app.pencil.style);
                }
            }
            Effect::None
        }
    }
}
