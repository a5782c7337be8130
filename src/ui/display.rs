//! Expression and result lines.

use crate::calculator::{add_thousands_separator, format_number, truncate_expression};
use crate::config::Config;
use crate::editor::Snapshot;

/// What the display area shows for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayView {
    /// The expression, truncated from the left if too long. `0` when empty.
    pub expression: String,
    /// The formatted result, the error message, or empty.
    pub result: String,
    pub is_error: bool,
}

impl DisplayView {
    pub fn from_snapshot(snapshot: &Snapshot, config: &Config) -> Self {
        let expression = if snapshot.expression.is_empty() {
            "0".to_string()
        } else {
            truncate_expression(&snapshot.expression, config.max_display_length)
        };

        if let Some(error) = &snapshot.error {
            return Self {
                expression,
                result: error.clone(),
                is_error: true,
            };
        }

        let result = snapshot
            .result
            .map(|value| format_result(value, config))
            .unwrap_or_default();

        Self {
            expression,
            result,
            is_error: false,
        }
    }

    pub fn render(&self) -> String {
        if self.result.is_empty() {
            return self.expression.clone();
        }
        let prefix = if self.is_error { "! " } else { "= " };
        format!("{}\n{prefix}{}", self.expression, self.result)
    }
}

fn format_result(value: f64, config: &Config) -> String {
    let formatted = format_number(value, config.max_result_length);
    // Exponential output is already compact.
    if config.thousands_separator && !formatted.contains('e') {
        add_thousands_separator(value)
    } else {
        formatted
    }
}
