//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::agent::{AgentBackend, AgentError, AgentReply};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// An agent stub returning a canned reply, for tests that don't need
/// real HTTP.
pub struct StubAgent {
    pub reply: AgentReply,
}

#[async_trait]
impl AgentBackend for StubAgent {
    fn name(&self) -> &str {
        "stub"
    }

    async fn ask(&self, _query: &str) -> Result<AgentReply, AgentError> {
        Ok(self.reply.clone())
    }
}

/// Creates a test App backed by a StubAgent and a fixed config.
pub fn test_app() -> App {
    let config = ResolvedConfig {
        endpoint: "http://localhost:9/invoke".to_string(),
        examples: vec![
            "Give me articles from last week".to_string(),
            "Show me headlines from this month".to_string(),
        ],
    };
    App::new(
        Arc::new(StubAgent {
            reply: AgentReply::default(),
        }),
        &config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_agent_answers() {
        let agent = StubAgent {
            reply: AgentReply {
                response: "canned".to_string(),
                articles: None,
            },
        };
        let reply = tokio_test::block_on(agent.ask("anything")).unwrap();
        assert_eq!(reply.response, "canned");
    }
}
