//! Pure state transitions: `(EditorState, Action) -> EditorState`.

use super::action::Action;
use super::history::HistoryEntry;
use super::state::{EditorState, Mode};
use crate::calculator::{self, CalcError};
use tracing::{debug, info};

/// Apply `action` to `state` and return the next state.
///
/// Every action runs to completion; none of them can fail. Refused input
/// leaves the state untouched.
pub fn transition(mut state: EditorState, action: Action) -> EditorState {
    apply(&mut state, action);
    state
}

/// In-place form of [`transition`], used by the owning [`super::Editor`].
pub(super) fn apply(state: &mut EditorState, action: Action) {
    match action {
        Action::AddInput(token) => add_input(state, token),
        Action::DeleteLast => delete_last(state),
        Action::Evaluate => evaluate(state),
        Action::Clear => clear(state),
        Action::ContinueCalculation => continue_calculation(state),
        Action::SetError(message) => state.error = Some(message),
    }
}

fn add_input(state: &mut EditorState, token: char) {
    if state.mode == Mode::PostEquals
        && let Some(previous) = state.result
    {
        if token.is_ascii_digit() || token == '.' {
            debug!(%token, "digit refused after a result");
            state.error = Some(CalcError::PostEqualsRestriction.to_string());
            return;
        }

        let continued = if calculator::is_operator(token) {
            Some(format!("{previous}{token}"))
        } else if token == '(' {
            Some(format!("{previous}*("))
        } else {
            None
        };

        if let Some(expression) = continued {
            debug!(%expression, "continuing from previous result");
            set_expression(state, expression);
            return;
        }
    }

    match calculator::try_append(&state.expression, token) {
        Ok(expression) => set_expression(state, expression),
        Err(reason) => debug!(%token, %reason, "input refused"),
    }
}

fn delete_last(state: &mut EditorState) {
    if state.expression.is_empty() {
        return;
    }

    let mut expression = std::mem::take(&mut state.expression);
    expression.pop();
    set_expression(state, expression);
}

fn evaluate(state: &mut EditorState) {
    if state.expression.is_empty() {
        return;
    }

    match calculator::evaluate(&state.expression) {
        Ok(value) => {
            let expression = std::mem::take(&mut state.expression);
            info!(%expression, result = value, "calculation complete");
            if let Some(evicted) = state.history.push(HistoryEntry::new(expression, value)) {
                debug!(entry = %evicted, "history full, dropped oldest entry");
            }
            state.result = Some(value);
            state.error = None;
            state.mode = Mode::PostEquals;
        }
        Err(e) => {
            debug!(expression = %state.expression, error = %e, "evaluation failed");
            state.result = None;
            state.error = Some(e.to_string());
            state.mode = Mode::Editing;
        }
    }
}

fn clear(state: &mut EditorState) {
    state.expression.clear();
    state.result = None;
    state.error = None;
    state.mode = Mode::Editing;
    if !state.options.keep_history_on_clear {
        state.history.clear();
    }
}

fn continue_calculation(state: &mut EditorState) {
    let Some(recent) = state.history.most_recent_result() else {
        return;
    };

    state.expression = recent.to_string();
    state.result = Some(recent);
    state.error = None;
    state.mode = Mode::Editing;
}

/// Replace the expression and bring result and error in line with it.
fn set_expression(state: &mut EditorState, expression: String) {
    state.mode = Mode::Editing;
    match calculator::evaluate(&expression) {
        Ok(value) => {
            state.result = Some(value);
            state.error = None;
        }
        Err(e) => {
            state.result = None;
            state.error = Some(e.to_string());
        }
    }
    state.expression = expression;
}
