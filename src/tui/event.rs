use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    ForceQuit,
    Submit,

    // Input editing
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Result view scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Reset,        // Ctrl+L clears query, result, and error
    CycleExample, // Ctrl+E cycles example queries into the input
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::ForceQuit)
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::Reset)
                }
                KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::CycleExample)
                }
                KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
                KeyCode::Backspace => Some(TuiEvent::Backspace),
                KeyCode::Delete => Some(TuiEvent::Delete),
                KeyCode::Enter => Some(TuiEvent::Submit),
                KeyCode::Esc => Some(TuiEvent::Quit),
                KeyCode::Left => Some(TuiEvent::CursorLeft),
                KeyCode::Right => Some(TuiEvent::CursorRight),
                KeyCode::Home => Some(TuiEvent::CursorHome),
                KeyCode::End => Some(TuiEvent::CursorEnd),
                KeyCode::Up => Some(TuiEvent::ScrollUp),
                KeyCode::Down => Some(TuiEvent::ScrollDown),
                KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
                KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
