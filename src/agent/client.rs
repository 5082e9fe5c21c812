//! HTTP client for the desk agent endpoint.
//!
//! One operation: POST the query as JSON, get the reply envelope back.
//! Non-2xx responses may carry a `detail` field which is used verbatim
//! as the user-visible message.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{AgentErrorBody, AgentQuery, AgentReply};

/// Errors that can occur while talking to the agent.
#[derive(Debug)]
pub enum AgentError {
    /// Network-level failure (DNS, connection refused, broken transfer).
    Network(String),
    /// The endpoint answered with a non-2xx status. `message` is the
    /// server's `detail` field when present, else names the status code.
    Api { status: u16, message: String },
    /// The 2xx body was not a valid reply envelope.
    Parse(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Network(msg) => write!(f, "network error: {msg}"),
            // The server's own words reach the user unchanged.
            AgentError::Api { message, .. } => write!(f, "{message}"),
            AgentError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

/// The seam between the app and the remote service. Tests substitute
/// a stub; production uses [`HttpAgent`].
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Ask the agent one natural-language question.
    async fn ask(&self, query: &str) -> Result<AgentReply, AgentError>;
}

/// `reqwest`-backed agent client.
pub struct HttpAgent {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAgent {
    /// Creates a client for the given endpoint URL (the full invoke path,
    /// e.g. `https://host/invoke`).
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AgentBackend for HttpAgent {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, query: &str) -> Result<AgentReply, AgentError> {
        info!("POST {} ({} char query)", self.endpoint, query.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AgentQuery { query })
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Agent response status: {}", status);

        if !status.is_success() {
            let status = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AgentErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("HTTP error: status {status}"));
            warn!("Agent error: {} - {}", status, message);
            return Err(AgentError::Api { status, message });
        }

        response
            .json::<AgentReply>()
            .await
            .map_err(|e| AgentError::Parse(e.to_string()))
    }
}
