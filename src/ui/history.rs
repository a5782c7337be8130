//! History section rendering.

use crate::editor::HistoryEntry;

/// Render the history list, newest first, one `expression = result` per line.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "Calculation History\n  Empty Calculations".to_string();
    }

    let mut out = String::from("Calculation History");
    for entry in entries {
        out.push_str("\n  ");
        out.push_str(&entry.to_string());
    }
    out
}
