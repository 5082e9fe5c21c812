//! # Core Application Logic
//!
//! This module contains Newsdesk's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   agent    │
//!             │  Adapter   │          │  (HTTP)    │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `Session` enum driving the view
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
