//! # Idle Suggestions Component
//!
//! Shown when there is no result, no error, and no request in flight:
//! a card of example queries the user can cycle into the input with Ctrl+E.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct IdleView<'a> {
    /// Example queries from the resolved config.
    pub examples: &'a [String],
    /// Index of the example last cycled into the input, if any.
    pub highlighted: Option<usize>,
}

impl Component for IdleView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "Ask about the editorials in plain language.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (i, example) in self.examples.iter().enumerate() {
            let style = if self.highlighted == Some(i) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(format!("\"{example}\""), style)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Ctrl+E cycles an example into the input · Ctrl+L clears · Esc quits",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("newsdesk v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        let card = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("example queries")
                    .border_style(Style::default().add_modifier(Modifier::DIM)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn examples() -> Vec<String> {
        vec![
            "Give me articles from last week".to_string(),
            "Show me headlines from this month".to_string(),
        ]
    }

    #[test]
    fn test_render_lists_examples() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let examples = examples();
        let mut view = IdleView {
            examples: &examples,
            highlighted: None,
        };

        terminal
            .draw(|f| {
                view.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Give me articles from last week"));
        assert!(text.contains("example queries"));
    }

    #[test]
    fn test_render_with_highlight_does_not_panic() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let examples = examples();
        let mut view = IdleView {
            examples: &examples,
            highlighted: Some(1),
        };

        terminal
            .draw(|f| {
                view.render(f, f.area());
            })
            .unwrap();
    }
}
