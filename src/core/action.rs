//! # Actions
//!
//! Everything that can happen in Newsdesk becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The agent answers? That's `Action::AnswerReceived`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry
//! out. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: submit a query, assert the session
//! went to `Loading` and a request effect came back.

use chrono::Local;
use log::{info, warn};

use crate::agent::AgentReply;
use crate::core::state::{App, FALLBACK_RESPONSE, QueryOutcome, Session};

#[derive(Debug)]
pub enum Action {
    /// Raw text handed over by the input box on Enter.
    Submit(String),
    /// The agent answered the given query.
    AnswerReceived { query: String, reply: AgentReply },
    /// The request failed; the message is shown to the user as-is.
    AnswerFailed(String),
    /// Clear query, result, and error in one go.
    Reset,
    Quit,
}

/// Side effects the adapter must perform after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the HTTP request for the trimmed query.
    SpawnRequest(String),
    /// Clear the input field (successful answer or reset).
    ClearInput,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let query = text.trim();
            if query.is_empty() {
                return Effect::None;
            }
            if app.session.is_loading() {
                // One request in flight at a time.
                return Effect::None;
            }
            info!("Submitting query ({} chars)", query.len());
            app.status_message = String::from("Waiting for the desk agent");
            app.session = Session::Loading {
                query: query.to_string(),
            };
            Effect::SpawnRequest(query.to_string())
        }
        Action::AnswerReceived { query, reply } => {
            let response_text = if reply.response.trim().is_empty() {
                FALLBACK_RESPONSE.to_string()
            } else {
                reply.response
            };
            let article_count = reply.articles.as_ref().map_or(0, Vec::len);
            info!(
                "Answer received: {} chars, {} article(s)",
                response_text.len(),
                article_count
            );
            app.status_message = String::from("Answer ready");
            app.session = Session::Answered(QueryOutcome {
                query,
                response_text,
                articles: reply.articles,
                timestamp: Local::now(),
            });
            Effect::ClearInput
        }
        Action::AnswerFailed(message) => {
            warn!("Request failed: {}", message);
            app.status_message = String::from("Request failed");
            app.session = Session::Failed { message };
            Effect::None
        }
        Action::Reset => {
            app.status_message = String::from("Cleared");
            app.session = Session::Idle;
            Effect::ClearInput
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentReply, Article};
    use crate::test_support::test_app;

    fn reply(text: &str) -> AgentReply {
        AgentReply {
            response: text.to_string(),
            articles: None,
        }
    }

    #[test]
    fn test_submit_trims_and_starts_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  what happened today?  ".to_string()));
        assert_eq!(
            effect,
            Effect::SpawnRequest("what happened today?".to_string())
        );
        match &app.session {
            Session::Loading { query } => assert_eq!(query, "what happened today?"),
            other => panic!("expected Loading, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_empty_is_a_no_op() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit(String::new())), Effect::None);
        assert_eq!(
            update(&mut app, Action::Submit("   \t  ".to_string())),
            Effect::None
        );
        assert!(matches!(app.session, Session::Idle));
    }

    #[test]
    fn test_submit_while_loading_spawns_no_second_request() {
        let mut app = test_app();
        update(&mut app, Action::Submit("first".to_string()));
        let effect = update(&mut app, Action::Submit("second".to_string()));
        assert_eq!(effect, Effect::None);
        match &app.session {
            Session::Loading { query } => assert_eq!(query, "first"),
            other => panic!("expected Loading, got {other:?}"),
        }
    }

    #[test]
    fn test_answer_received_stores_outcome_and_clears_input() {
        let mut app = test_app();
        update(&mut app, Action::Submit("headlines".to_string()));
        let effect = update(
            &mut app,
            Action::AnswerReceived {
                query: "headlines".to_string(),
                reply: reply("Here you go"),
            },
        );
        assert_eq!(effect, Effect::ClearInput);
        match &app.session {
            Session::Answered(outcome) => {
                assert_eq!(outcome.query, "headlines");
                assert_eq!(outcome.response_text, "Here you go");
                assert!(outcome.articles.is_none());
            }
            other => panic!("expected Answered, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_answer_falls_back_to_placeholder() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "q".to_string(),
                reply: reply("   "),
            },
        );
        match &app.session {
            Session::Answered(outcome) => {
                assert_eq!(outcome.response_text, FALLBACK_RESPONSE);
            }
            other => panic!("expected Answered, got {other:?}"),
        }
    }

    #[test]
    fn test_answer_with_articles_is_kept() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "q".to_string(),
                reply: AgentReply {
                    response: "ok".to_string(),
                    articles: Some(vec![Article {
                        title: "A".to_string(),
                        url: "http://x".to_string(),
                    }]),
                },
            },
        );
        match &app.session {
            Session::Answered(outcome) => {
                let articles = outcome.articles.as_ref().expect("articles kept");
                assert_eq!(articles.len(), 1);
                assert_eq!(articles[0].title, "A");
                assert_eq!(articles[0].url, "http://x");
            }
            other => panic!("expected Answered, got {other:?}"),
        }
    }

    #[test]
    fn test_answer_replaces_prior_result() {
        let mut app = test_app();
        update(&mut app, Action::Submit("one".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "one".to_string(),
                reply: reply("first answer"),
            },
        );
        update(&mut app, Action::Submit("two".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "two".to_string(),
                reply: reply("second answer"),
            },
        );
        match &app.session {
            Session::Answered(outcome) => {
                assert_eq!(outcome.query, "two");
                assert_eq!(outcome.response_text, "second answer");
            }
            other => panic!("expected Answered, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_keeps_input_intact() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        let effect = update(&mut app, Action::AnswerFailed("bad input".to_string()));
        // No ClearInput: the user gets to edit and retry.
        assert_eq!(effect, Effect::None);
        match &app.session {
            Session::Failed { message } => assert_eq!(message, "bad input"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_after_success_clears_everything() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::AnswerReceived {
                query: "q".to_string(),
                reply: reply("answer"),
            },
        );
        let effect = update(&mut app, Action::Reset);
        assert_eq!(effect, Effect::ClearInput);
        assert!(matches!(app.session, Session::Idle));
    }

    #[test]
    fn test_reset_after_error_clears_everything() {
        let mut app = test_app();
        update(&mut app, Action::Submit("q".to_string()));
        update(&mut app, Action::AnswerFailed("boom".to_string()));
        let effect = update(&mut app, Action::Reset);
        assert_eq!(effect, Effect::ClearInput);
        assert!(matches!(app.session, Session::Idle));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
