//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Request Flow
//!
//! The HTTP call runs on a spawned tokio task that reports back over an
//! mpsc channel as an `Action`; the loop drains the channel each
//! iteration. The reducer's `Loading` state keeps a second submission
//! from spawning a second request. There is no cancellation: a hung
//! request holds the loading view until the agent answers or the app
//! exits.

pub mod component;
pub mod components;
pub mod event;
pub mod markdown;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::agent::{AgentBackend, HttpAgent};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AnswerViewState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub answer_view: AnswerViewState,
    /// Index of the example last cycled into the input (Ctrl+E).
    pub example_cursor: Option<usize>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            answer_view: AnswerViewState::new(),
            example_cursor: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let agent: Arc<dyn AgentBackend> = Arc::new(HttpAgent::new(config.endpoint.clone()));
    let mut app = App::new(agent, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background request tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The spinner animates while a request is outstanding
        let animating = app.session.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,

                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::Reset => {
                    if update(&mut app, Action::Reset) == Effect::ClearInput {
                        tui.input_box.clear();
                    }
                    tui.answer_view = AnswerViewState::new();
                    tui.example_cursor = None;
                }

                TuiEvent::CycleExample => {
                    if !app.examples.is_empty() {
                        let next = tui
                            .example_cursor
                            .map(|i| (i + 1) % app.examples.len())
                            .unwrap_or(0);
                        tui.example_cursor = Some(next);
                        tui.input_box.set_text(&app.examples[next]);
                    }
                }

                // Scroll events go to the answer view
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.answer_view.handle_event(&event);
                }

                // Everything else is input editing
                _ => {
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                if !app.session.is_loading()
                                    && let Effect::SpawnRequest(query) =
                                        update(&mut app, Action::Submit(text))
                                {
                                    spawn_request(&app, query, tx.clone());
                                    tui.answer_view = AnswerViewState::new();
                                }
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::SpawnRequest(query) => {
                    spawn_request(&app, query, tx.clone());
                }
                Effect::ClearInput => tui.input_box.clear(),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_request(app: &App, query: String, tx: mpsc::Sender<Action>) {
    info!("Spawning agent request");
    let agent = app.agent.clone();
    tokio::spawn(async move {
        let action = match agent.ask(&query).await {
            Ok(reply) => Action::AnswerReceived { query, reply },
            Err(e) => Action::AnswerFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver agent result: receiver dropped");
        }
    });
}
