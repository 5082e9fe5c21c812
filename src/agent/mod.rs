//! # Agent
//!
//! The remote collaborator: a desk agent answering natural-language
//! questions over HTTP. [`types`] defines the wire envelope, [`client`]
//! the `reqwest`-backed implementation behind the [`AgentBackend`] seam.

pub mod client;
pub mod types;

pub use client::{AgentBackend, AgentError, HttpAgent};
pub use types::{AgentReply, Article};
