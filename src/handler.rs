use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::event::Action;

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(key),
        Event::Mouse(mouse) => handle_mouse_event(mouse),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Handles key press events.
fn handle_key_press(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::ReloadConfig),
        _ => None,
    }
}

/// Forwards presses and movement; scroll and drag have no meaning for the widget.
fn handle_mouse_event(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(_) | MouseEventKind::Moved => Some(Action::Pointer(mouse)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::click;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_bindings() {
        let cases = [
            (KeyCode::Char('q'), Some(Action::Quit)),
            (KeyCode::Esc, Some(Action::Quit)),
            (KeyCode::Char('r'), Some(Action::ReloadConfig)),
            (KeyCode::Char('x'), None),
            (KeyCode::Enter, None),
        ];

        for (code, expected) in cases {
            assert_eq!(handle_event(key(code)), expected, "{code:?}");
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_forwarding() {
        let press = click(3, 4);
        assert_eq!(
            handle_event(Event::Mouse(press)),
            Some(Action::Pointer(press))
        );

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..press
        };
        assert_eq!(
            handle_event(Event::Mouse(moved)),
            Some(Action::Pointer(moved))
        );

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..press
        };
        assert_eq!(handle_event(Event::Mouse(scroll)), None);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(handle_event(Event::Mouse(release)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            handle_event(Event::Resize(80, 24)),
            Some(Action::Resize(80, 24))
        );
    }
}
