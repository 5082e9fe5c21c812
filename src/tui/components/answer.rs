//! # Answer Card Component
//!
//! Scrollable view of one answered query: the query echo with its
//! timestamp, the agent's response rendered as markdown, and the
//! optional article links.
//!
//! ## Height Calculation
//!
//! Segment heights must be known before rendering so the `ScrollView`
//! canvas can be sized. Plain text (the query echo) is measured with
//! `textwrap` using options that match `Paragraph`'s wrapping; styled
//! markdown text goes through `Paragraph::line_count`, which accounts
//! for the surrounding block.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::QueryOutcome;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

/// Total vertical space consumed by a block's borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Total horizontal space consumed by a block's borders (1 left + 1 right).
const HORIZONTAL_OVERHEAD: u16 = 2;

/// Scroll state for the answer view. Persisted in the parent TuiState and
/// reset when a new answer replaces the old one.
pub struct AnswerViewState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height, for page scrolling and clamping.
    pub viewport_height: u16,
}

impl AnswerViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
        }
    }

    /// Handle a scroll event. Returns true if the offset changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                true
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                true
            }
            TuiEvent::ScrollPageUp => {
                let page = self.viewport_height.saturating_sub(1);
                let current = self.scroll_state.offset();
                self.scroll_state.set_offset(Position {
                    x: current.x,
                    y: current.y.saturating_sub(page),
                });
                true
            }
            TuiEvent::ScrollPageDown => {
                let page = self.viewport_height.saturating_sub(1);
                let current = self.scroll_state.offset();
                // Overshoot is clamped against content height at render time.
                self.scroll_state.set_offset(Position {
                    x: current.x,
                    y: current.y.saturating_add(page),
                });
                true
            }
            _ => false,
        }
    }

    /// Clamp the offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self, total_height: u16) {
        let max_y = total_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl Default for AnswerViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// One pre-measured block of the answer view.
struct Segment {
    paragraph: Paragraph<'static>,
    height: u16,
}

pub struct AnswerCard<'a> {
    outcome: &'a QueryOutcome,
    state: &'a mut AnswerViewState,
}

impl<'a> AnswerCard<'a> {
    pub fn new(outcome: &'a QueryOutcome, state: &'a mut AnswerViewState) -> Self {
        Self { outcome, state }
    }
}

impl Component for AnswerCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 || area.height == 0 {
            return;
        }
        self.state.viewport_height = area.height;

        let segments = build_segments(self.outcome, content_width);
        let total_height: u16 = segments.iter().map(|s| s.height).sum();
        self.state.clamp_scroll(total_height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for segment in segments {
            let rect = Rect::new(0, y_offset, content_width, segment.height);
            scroll_view.render_widget(segment.paragraph, rect);
            y_offset += segment.height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Predict the rendered height of plain wrapped text inside a bordered
/// block. The wrapping options match `Paragraph`'s `Wrap { trim: true }`
/// so calculated and actual heights agree.
fn wrapped_height(content: &str, width: u16) -> u16 {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return 1;
    }

    let content = content.trim();
    if content.is_empty() {
        return VERTICAL_OVERHEAD;
    }

    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(content, options);
    (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
}

fn build_segments(outcome: &QueryOutcome, width: u16) -> Vec<Segment> {
    let mut segments = Vec::new();

    // Submission time, dim and right-aligned above the query echo.
    let stamp = outcome.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    segments.push(Segment {
        paragraph: Paragraph::new(Line::from(Span::styled(
            stamp,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        height: 1,
    });

    // Query echo.
    let query_style = Style::default().fg(Color::Cyan);
    let query = Paragraph::new(outcome.query.clone())
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("your query")
                .border_style(query_style.add_modifier(Modifier::DIM))
                .title_style(query_style),
        )
        .style(query_style)
        .wrap(Wrap { trim: true });
    segments.push(Segment {
        height: wrapped_height(&outcome.query, width),
        paragraph: query,
    });

    // The agent's answer, rendered as markdown.
    let body = markdown::render(&outcome.response_text, Color::Blue);
    let answer_style = Style::default().fg(Color::Blue);
    let answer = Paragraph::new(body)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("desk agent")
                .border_style(answer_style.add_modifier(Modifier::DIM))
                .title_style(answer_style),
        )
        .wrap(Wrap { trim: false });
    segments.push(Segment {
        height: answer.line_count(width) as u16,
        paragraph: answer,
    });

    // Optional article links.
    if let Some(articles) = outcome.articles.as_ref().filter(|a| !a.is_empty()) {
        let mut lines = Vec::new();
        for article in articles {
            let mut spans = vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    article.label().to_string(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ];
            // Only repeat the URL when the label is the title.
            if article.label() != article.url && !article.url.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    article.url.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
        let article_style = Style::default().fg(Color::Yellow);
        let article_list = Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("articles")
                    .border_style(article_style.add_modifier(Modifier::DIM))
                    .title_style(article_style),
            )
            .wrap(Wrap { trim: false });
        segments.push(Segment {
            height: article_list.line_count(width) as u16,
            paragraph: article_list,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Article;
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn outcome(articles: Option<Vec<Article>>) -> QueryOutcome {
        QueryOutcome {
            query: "headlines from today".to_string(),
            response_text: "Here are the **headlines**.".to_string(),
            articles,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_segments_without_articles() {
        // Timestamp + query + answer
        let segments = build_segments(&outcome(None), 80);
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_segments_with_articles() {
        let articles = vec![Article {
            title: "A".to_string(),
            url: "http://x".to_string(),
        }];
        let segments = build_segments(&outcome(Some(articles)), 80);
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_empty_article_list_gets_no_section() {
        let segments = build_segments(&outcome(Some(vec![])), 80);
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_wrapped_height_single_line() {
        // 1 content line + 2 border rows
        assert_eq!(wrapped_height("Hello", 80), 3);
    }

    #[test]
    fn test_wrapped_height_wraps_at_width() {
        // "Hello world" at content width 5 → "Hello" | "world" → 2 + borders
        assert_eq!(wrapped_height("Hello world", 7), 4);
    }

    #[test]
    fn test_wrapped_height_degenerate_width() {
        assert_eq!(wrapped_height("Hello", 2), 1);
    }

    #[test]
    fn test_render_shows_query_and_article() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let outcome = outcome(Some(vec![Article {
            title: "Editorial A".to_string(),
            url: "http://x".to_string(),
        }]));
        let mut state = AnswerViewState::new();

        terminal
            .draw(|f| {
                AnswerCard::new(&outcome, &mut state).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("headlines from today"));
        assert!(text.contains("Editorial A"));
    }

    #[test]
    fn test_scroll_events_move_offset() {
        let mut state = AnswerViewState::new();
        state.viewport_height = 10;

        assert!(state.handle_event(&TuiEvent::ScrollDown));
        assert_eq!(state.scroll_state.offset().y, 1);

        assert!(state.handle_event(&TuiEvent::ScrollPageDown));
        assert_eq!(state.scroll_state.offset().y, 10);

        assert!(state.handle_event(&TuiEvent::ScrollPageUp));
        assert_eq!(state.scroll_state.offset().y, 1);

        assert!(state.handle_event(&TuiEvent::ScrollUp));
        assert_eq!(state.scroll_state.offset().y, 0);

        assert!(!state.handle_event(&TuiEvent::Submit));
    }

    #[test]
    fn test_clamp_scroll_limits_offset() {
        let mut state = AnswerViewState::new();
        state.viewport_height = 10;
        state.scroll_state.set_offset(Position { x: 0, y: 100 });
        state.clamp_scroll(30);
        assert_eq!(state.scroll_state.offset().y, 20);
    }
}
