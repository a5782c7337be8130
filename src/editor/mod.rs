//! Editing state machine.
//!
//! [`transition`] is the pure core. [`Editor`] owns one [`EditorState`] for
//! the lifetime of a session, applies actions in submission order and tells
//! subscribers about every new [`Snapshot`].

mod action;
mod history;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryList};
pub use state::{EditorOptions, EditorState, Mode, Snapshot};
pub use transition::transition;

use tracing::trace;

/// Handle returned by [`Editor::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Owns the editor state and publishes a snapshot after each action.
pub struct Editor {
    state: EditorState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl Editor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            state: EditorState::new(options),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply one action and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "dispatch");
        transition::apply(&mut self.state, action);

        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.state.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    pub fn add_input(&mut self, token: char) {
        self.dispatch(Action::AddInput(token));
    }

    pub fn delete_last(&mut self) {
        self.dispatch(Action::DeleteLast);
    }

    pub fn evaluate(&mut self) {
        self.dispatch(Action::Evaluate);
    }

    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn continue_calculation(&mut self) {
        self.dispatch(Action::ContinueCalculation);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.dispatch(Action::SetError(message.into()));
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Register a callback invoked with the new snapshot after every action.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}
