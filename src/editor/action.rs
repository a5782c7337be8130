/// Everything a front end can ask the editor to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Type a single character.
    AddInput(char),
    /// Remove the last character of the expression.
    DeleteLast,
    /// Evaluate the expression and record it in history.
    Evaluate,
    /// Reset expression, result and error.
    Clear,
    /// Load the most recent history result as the new expression.
    ContinueCalculation,
    /// Show a message from the front end in the error slot.
    SetError(String),
}
