//! # Application State
//!
//! Core business state for Newsdesk. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── agent: Arc<dyn AgentBackend>  // remote collaborator
//! ├── session: Session              // idle | loading | failed | answered
//! ├── status_message: String        // title bar text
//! ├── endpoint: String              // where queries go (display only)
//! └── examples: Vec<String>         // idle-state query suggestions
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::agent::{AgentBackend, Article};
use crate::core::config::ResolvedConfig;

/// Shown in place of an empty answer so the result card is never blank.
pub const FALLBACK_RESPONSE: &str = "No response received";

/// Everything known about one answered query.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The trimmed text the user submitted.
    pub query: String,
    /// The agent's answer, never empty (see [`FALLBACK_RESPONSE`]).
    pub response_text: String,
    /// Links returned alongside the answer, if any.
    pub articles: Option<Vec<Article>>,
    /// When the answer arrived.
    pub timestamp: DateTime<Local>,
}

/// The four mutually exclusive session states driving the render switch.
///
/// Exactly one result is active at a time: entering `Answered` or `Failed`
/// replaces whatever was there before.
#[derive(Debug, Clone)]
pub enum Session {
    Idle,
    Loading { query: String },
    Failed { message: String },
    Answered(QueryOutcome),
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading { .. })
    }
}

pub struct App {
    pub agent: Arc<dyn AgentBackend>,
    pub session: Session,
    pub status_message: String,
    pub endpoint: String,
    pub examples: Vec<String>,
}

impl App {
    pub fn new(agent: Arc<dyn AgentBackend>, config: &ResolvedConfig) -> Self {
        Self {
            agent,
            session: Session::Idle,
            status_message: String::from("Welcome to Newsdesk!"),
            endpoint: config.endpoint.clone(),
            examples: config.examples.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Newsdesk!");
        assert!(!app.session.is_loading());
        assert!(matches!(app.session, Session::Idle));
    }

    #[test]
    fn test_is_loading_only_for_loading_state() {
        assert!(!Session::Idle.is_loading());
        assert!(
            Session::Loading {
                query: "q".to_string()
            }
            .is_loading()
        );
        assert!(
            !Session::Failed {
                message: "boom".to_string()
            }
            .is_loading()
        );
    }
}
