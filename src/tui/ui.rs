use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::{App, Session};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AnswerCard, IdleView};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        format!("Newsdesk (agent: {})", app.endpoint)
    } else {
        format!("Newsdesk (agent: {}) | {}", app.endpoint, app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Main area - the four-way switch on the session
    match &app.session {
        Session::Idle => {
            let mut idle = IdleView {
                examples: &app.examples,
                highlighted: tui.example_cursor,
            };
            idle.render(frame, main_area);
        }
        Session::Loading { query } => draw_loading_view(frame, main_area, query, spinner_frame),
        Session::Failed { message } => draw_error_view(frame, main_area, message),
        Session::Answered(outcome) => {
            AnswerCard::new(outcome, &mut tui.answer_view).render(frame, main_area);
        }
    }

    // Input area
    tui.input_box.busy = app.session.is_loading();
    tui.input_box.render(frame, input_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, query: &str, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{spinner} Consulting the desk agent..."),
            Style::default().fg(Color::Yellow),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("\"{query}\""),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().add_modifier(Modifier::DIM)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Ctrl+L clears · edit the query and press Enter to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let banner = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentReply, Article};
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_frame_shows_examples() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Give me articles from last week"));
        assert!(text.contains("ask the desk"));
    }

    #[test]
    fn test_loading_frame_shows_spinner_and_query() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Submit("today's headlines".to_string()));
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Consulting the desk agent"));
        assert!(text.contains("today's headlines"));
        assert!(text.contains("waiting"));
    }

    #[test]
    fn test_failed_frame_shows_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(&mut app, Action::AnswerFailed("bad input".to_string()));
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("ERROR"));
        assert!(text.contains("bad input"));
    }

    #[test]
    fn test_answered_frame_shows_response_and_articles() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Submit("economy articles".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "economy articles".to_string(),
                reply: AgentReply {
                    response: "Two pieces stood out.".to_string(),
                    articles: Some(vec![Article {
                        title: "Budget woes".to_string(),
                        url: "http://x/budget".to_string(),
                    }]),
                },
            },
        );
        let mut tui = TuiState::new();

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, 0))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("economy articles"));
        assert!(text.contains("Two pieces stood out."));
        assert!(text.contains("Budget woes"));
    }
}
