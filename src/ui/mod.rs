//! Plain-text rendering of editor snapshots.

mod display;
mod history;

pub use display::DisplayView;
pub use history::render_history;

use crate::config::Config;
use crate::editor::Snapshot;

/// Render the display area followed by the history section.
pub fn render(snapshot: &Snapshot, config: &Config) -> String {
    let display = DisplayView::from_snapshot(snapshot, config).render();
    format!("{display}\n\n{}", render_history(&snapshot.history))
}
