//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! Components come in two flavors:
//!
//! - **Stateless (props-based)**: created fresh each frame with the data
//!   they need. `IdleView` and `AnswerCard` (whose scroll state lives in
//!   `AnswerViewState`, owned by the parent `TuiState`).
//! - **Stateful (event-driven)**: hold local state and emit high-level
//!   events. `InputBox` owns the text buffer and cursor.
//!
//! Each component file contains its state types, event types, rendering
//! logic, and tests, so one file tells the whole story.

pub mod answer;
pub mod idle;
pub mod input_box;

pub use answer::{AnswerCard, AnswerViewState};
pub use idle::IdleView;
pub use input_box::{InputBox, InputEvent};
