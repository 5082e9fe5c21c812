use serde::{Deserialize, Serialize};

/// Request body for the agent endpoint.
#[derive(Serialize, Debug)]
pub struct AgentQuery<'a> {
    pub query: &'a str,
}

/// A titled link returned by the agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl Article {
    /// Display label: the title, or the URL when the title is empty.
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Response envelope from the agent endpoint.
///
/// Both fields tolerate absence: a missing `response` becomes the empty
/// string and a missing or `null` `articles` becomes `None`. Extra
/// fields some deployments attach to articles (content, date) are
/// ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AgentReply {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

/// Error body the agent returns on non-2xx responses.
#[derive(Deserialize, Debug)]
pub struct AgentErrorBody {
    pub detail: Option<String>,
}
