//! Calculator module for validating and evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Decide whether a typed character may extend an expression
//! - Parse and evaluate expressions with standard precedence
//! - Format results for display

mod error;
mod evaluation;
mod format;
pub mod parser;
mod validation;

pub use error::{CalcError, Rejection};
pub use evaluation::{
    DECIMAL_PLACES, EvaluationOutcome, MAX_EXPRESSION_LENGTH, evaluate, is_structurally_valid,
    round_to_precision,
};
pub use format::{add_thousands_separator, format_number, truncate_expression};
pub use validation::{
    OPERATORS, can_append, is_expression_char, is_operator, open_bracket_depth, try_append,
};
