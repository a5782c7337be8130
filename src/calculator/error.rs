//! Error types surfaced by the calculator core.

use thiserror::Error;

/// An error shown to the user in place of a result.
///
/// The `Display` strings are part of the public interface: front ends show
/// them verbatim or map them to localized text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Unbalanced brackets, a dangling operator, an empty expression or
    /// anything else the parser refuses.
    #[error("Invalid expression")]
    InvalidExpression,
    /// Structurally valid but numerically undefined (division by zero,
    /// overflow to infinity, NaN).
    #[error("Math error")]
    MathError,
    /// A digit or decimal point typed directly after a completed evaluation.
    #[error("Only operators and brackets allowed after a result")]
    PostEqualsRestriction,
}

/// Why the input validator refused a token.
///
/// A rejection is not an error state: the editor keeps the expression as it
/// was and sets no error message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("'{0}' is not part of the expression alphabet")]
    UnknownToken(char),
    #[error("a decimal point needs a leading digit")]
    LeadingDecimal,
    #[error("the current number already has a decimal point")]
    DuplicateDecimal,
    #[error("an expression cannot start with '{0}'")]
    LeadingOperator(char),
    #[error("'{token}' cannot follow '{last}'")]
    ConsecutiveOperator { last: char, token: char },
    #[error("no open bracket to close")]
    UnmatchedClose,
    #[error("a bracket cannot close after '{0}'")]
    EmptyGroup(char),
    #[error("the expression cannot grow past {0} characters")]
    TooLong(usize),
}
