use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Terminal dimensions changed; the screen needs a re-sync.
    Resize,
    /// Ctrl+C. Raw mode swallows the interrupt, so it is translated into
    /// an orderly quit.
    ForceQuit,
    /// A plain character key press.
    Key(char),
    /// Pointer at `(column, row)`. `primary` is set only while the
    /// primary button is held; wheel and other buttons still move the
    /// pointer but never paint.
    Pointer { column: u16, row: u16, primary: bool },
}

/// Block until the next event the session cares about. Events with no
/// mapping (paste, focus, non-character keys) are discarded here.
pub fn next_event() -> std::io::Result<TuiEvent> {
    loop {
        let translated = match event::read()? {
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            Event::Key(key_event) => map_key(key_event),
            Event::Mouse(mouse_event) => Some(map_mouse(mouse_event)),
            _ => None,
        };
        if let Some(ev) = translated {
            return Ok(ev);
        }
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c)),
        _ => None,
    }
}

fn map_mouse(mouse_event: MouseEvent) -> TuiEvent {
    // Only the primary button paints; everything else (other buttons,
    // wheel, plain movement) is a position update.
    let primary = matches!(
        mouse_event.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    );
    TuiEvent::Pointer {
        column: mouse_event.column,
        row: mouse_event.row,
        primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_plain_characters_map_to_key_events() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::Key('q'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(TuiEvent::Key('X'))
        );
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        // Plain 'c' stays a normal key (clear canvas).
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::Key('c'))
        );
    }

    #[test]
    fn test_non_character_keys_are_discarded() {
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(map_key(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_primary_press_and_drag_paint() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5)),
            TuiEvent::Pointer { column: 5, row: 5, primary: true }
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 6, 5)),
            TuiEvent::Pointer { column: 6, row: 5, primary: true }
        );
    }

    #[test]
    fn test_other_buttons_and_wheel_only_move_the_pointer() {
        for kind in [
            MouseEventKind::Moved,
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Down(MouseButton::Middle),
            MouseEventKind::ScrollUp,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(
                map_mouse(mouse(kind, 9, 2)),
                TuiEvent::Pointer { column: 9, row: 2, primary: false },
                "{kind:?} must not paint"
            );
        }
    }
}
