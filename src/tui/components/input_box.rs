//! # InputBox Component
//!
//! Single-line query entry at the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally when the text outgrows the visible width
//!
//! ## State Management
//!
//! The buffer is internal state. Submitting does NOT clear the buffer:
//! the event loop clears it via [`InputBox::clear`] when the reducer says
//! so (successful answer or reset), which keeps the text around for a
//! retry after an error. The `busy` flag is a prop from the session state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the trimmed text (Enter pressed, buffer non-blank)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

/// Single-line text input with horizontal scrolling.
///
/// # Props
///
/// - `busy`: true while a request is in flight (renders dimmed, hides cursor)
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor`: byte offset into `buffer`, always on a char boundary
/// - `scroll_col`: first visible display column
pub struct InputBox {
    pub buffer: String,
    pub busy: bool,
    cursor: usize,
    scroll_col: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            busy: false,
            cursor: 0,
            scroll_col: 0,
        }
    }

    /// Clear buffer, cursor, and scroll. Called on successful answer or reset.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll_col = 0;
    }

    /// Replace the buffer contents, cursor at the end. Used by example cycling.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
        self.scroll_col = 0;
    }

    /// Keep the cursor inside the visible window.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        if cursor_col < self.scroll_col {
            self.scroll_col = cursor_col;
        } else if cursor_col >= self.scroll_col + inner_width {
            self.scroll_col = cursor_col - inner_width + 1;
        }
    }

    /// The slice of the buffer that fits in `inner_width` columns starting
    /// at the scroll offset.
    fn visible_text(&self, inner_width: u16) -> String {
        let start = byte_at_col(&self.buffer, self.scroll_col);
        let mut out = String::new();
        let mut used = 0u16;
        for c in self.buffer[start..].chars() {
            let w = c.width().unwrap_or(0) as u16;
            if used + w > inner_width {
                break;
            }
            used += w;
            out.push(c);
        }
        out
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the character starting at display column `col`.
fn byte_at_col(s: &str, col: u16) -> usize {
    let mut seen = 0u16;
    for (i, c) in s.char_indices() {
        if seen >= col {
            return i;
        }
        seen += c.width().unwrap_or(0) as u16;
    }
    s.len()
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let (title, style) = if self.busy {
            (
                "ask the desk (waiting)",
                Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
            )
        } else {
            ("ask the desk", Style::default().fg(Color::Green))
        };

        let input = Paragraph::new(self.visible_text(inner_width))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .border_style(style),
            )
            .style(style);
        frame.render_widget(input, area);

        if !self.busy {
            let cursor_col = self.buffer[..self.cursor].width() as u16;
            let x = area.x + 1 + cursor_col.saturating_sub(self.scroll_col);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: pasted newlines become spaces.
                let flattened = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flattened);
                self.cursor += flattened.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let trimmed = self.buffer.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    // Buffer stays put; the reducer decides when it clears.
                    Some(InputEvent::Submit(trimmed.to_string()))
                }
            }
            _ => None,
        }
    }
}
