//! Live arithmetic expression editor.
//!
//! Keeps an expression string that is validated and evaluated after every
//! keystroke, and records completed calculations in a bounded history.
//!
//! - [`calculator`]: token validation, parsing, evaluation and formatting
//! - [`editor`]: the editing state machine and history
//! - [`ui`]: plain-text rendering for the bundled front end

pub mod calculator;
pub mod config;
pub mod editor;
pub mod keys;
pub mod logging;
pub mod ui;

pub use calculator::{CalcError, EvaluationOutcome, Rejection, evaluate, format_number};
pub use config::Config;
pub use editor::{Action, Editor, EditorState, HistoryEntry, Snapshot};
