//! Editor state and the read-only snapshot handed to front ends.

use super::history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryList};
use serde::Serialize;

/// Whether the last completed action was a successful evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Editing,
    /// The result of an evaluation is showing and the expression is empty.
    /// Only operators and brackets may continue from here.
    PostEquals,
}

/// Session-wide behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    pub history_capacity: usize,
    /// Keep history when the user clears the editor.
    pub keep_history_on_clear: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            keep_history_on_clear: false,
        }
    }
}

/// The single mutable record every action transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub(super) expression: String,
    pub(super) result: Option<f64>,
    pub(super) error: Option<String>,
    pub(super) history: HistoryList,
    pub(super) mode: Mode,
    pub(super) options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl EditorState {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            expression: String::new(),
            result: None,
            error: None,
            history: HistoryList::with_capacity(options.history_capacity),
            mode: Mode::Editing,
            options,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            expression: self.expression.clone(),
            result: self.result,
            error: self.error.clone(),
            history: self.history.iter().cloned().collect(),
            mode: self.mode,
        }
    }
}

/// Immutable copy of the editor state, published after every action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub expression: String,
    pub result: Option<f64>,
    pub error: Option<String>,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    pub mode: Mode,
}
