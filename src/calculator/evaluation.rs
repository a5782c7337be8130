//! Expression evaluation.
//!
//! Checks that an expression is complete enough to evaluate, runs it through
//! the parser and rounds the result to suppress binary floating point noise.

use super::error::CalcError;
use super::parser;
use tracing::debug;

/// Results are rounded to this many decimal places.
pub const DECIMAL_PLACES: i32 = 6;

/// Longest expression, in characters, that will be evaluated.
pub const MAX_EXPRESSION_LENGTH: usize = 1000;

/// Result of evaluating an expression: a finite, rounded value or the reason
/// there is none.
pub type EvaluationOutcome = Result<f64, CalcError>;

/// Check bracket balance and that the expression ends in something that can
/// close an operand (a digit or `)`).
pub fn is_structurally_valid(expression: &str) -> bool {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut depth = 0i64;
    for ch in trimmed.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    if depth != 0 {
        return false;
    }

    trimmed
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit() || c == ')')
}

/// Evaluate an expression.
///
/// Returns [`CalcError::InvalidExpression`] when the expression is not
/// structurally valid, is longer than [`MAX_EXPRESSION_LENGTH`] or does not
/// parse, and [`CalcError::MathError`] when
/// the value is not finite.
pub fn evaluate(expression: &str) -> EvaluationOutcome {
    if !is_structurally_valid(expression) {
        return Err(CalcError::InvalidExpression);
    }
    if expression.chars().count() > MAX_EXPRESSION_LENGTH {
        debug!(length = expression.len(), "expression too long to evaluate");
        return Err(CalcError::InvalidExpression);
    }

    let tree = parser::parse(expression).map_err(|e| {
        debug!(%expression, error = %e, "expression did not parse");
        CalcError::InvalidExpression
    })?;

    let value = tree.eval();
    if !value.is_finite() {
        return Err(CalcError::MathError);
    }

    Ok(round_to_precision(value))
}

/// Round to [`DECIMAL_PLACES`] decimal places, half away from zero.
///
/// Values too large to scale keep their magnitude; they have no fractional
/// digits worth rounding anyway.
pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMAL_PLACES);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / factor;
    // Avoid handing out -0 for tiny negative results.
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate("5+3"), Ok(8.0));
        assert_eq!(evaluate("10-3"), Ok(7.0));
        assert_eq!(evaluate("4*5"), Ok(20.0));
        assert_eq!(evaluate("20/4"), Ok(5.0));
        assert_eq!(evaluate("5 + 3"), Ok(8.0));
    }

    #[test]
    fn test_precedence_and_brackets() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("((2+3)*4)/2"), Ok(10.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("3.5+2.5"), Ok(6.0));
        assert_eq!(evaluate("2.5*4"), Ok(10.0));
        assert_eq!(evaluate("0.1+0.2"), Ok(0.3));
        assert_eq!(evaluate("1/3"), Ok(0.333333));
        assert_eq!(evaluate("2/3"), Ok(0.666667));
    }

    #[test]
    fn test_structural_validity() {
        assert!(is_structurally_valid("5+3"));
        assert!(is_structurally_valid("(5)"));
        assert!(!is_structurally_valid(""));
        assert!(!is_structurally_valid("   "));
        assert!(!is_structurally_valid("(5+3"));
        assert!(!is_structurally_valid(")5("));
        assert!(!is_structurally_valid("5+"));
        assert!(!is_structurally_valid("5."));
    }

    #[test]
    fn test_invalid_expressions() {
        assert_eq!(evaluate(""), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("5+"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("(5+3"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("(2)3"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("1.2.3"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_deep_nesting_is_invalid_not_fatal() {
        let deep = format!("{}5{}", "(-".repeat(10_000), ")".repeat(10_000));
        assert_eq!(evaluate(&deep), Err(CalcError::InvalidExpression));

        // Short enough to parse, too deep for the parser.
        let nested = format!("{}5{}", "(-".repeat(300), ")".repeat(300));
        assert!(nested.len() <= MAX_EXPRESSION_LENGTH);
        assert_eq!(evaluate(&nested), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_long_flat_expression() {
        let sum = format!("1{}", "+1".repeat(400));
        assert_eq!(evaluate(&sum), Ok(401.0));

        let too_long = format!("1{}", "+1".repeat(MAX_EXPRESSION_LENGTH));
        assert_eq!(evaluate(&too_long), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_math_errors() {
        assert_eq!(evaluate("5/0"), Err(CalcError::MathError));
        assert_eq!(evaluate("0/0"), Err(CalcError::MathError));
        assert_eq!(evaluate("-1/(2-2)"), Err(CalcError::MathError));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::InvalidExpression.to_string(), "Invalid expression");
        assert_eq!(CalcError::MathError.to_string(), "Math error");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_precision(1.23456789), 1.234568);
        assert_eq!(round_to_precision(-0.0000001), 0.0);
        assert_eq!(round_to_precision(1e305), 1e305);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        assert_eq!(evaluate("7/3"), evaluate("7/3"));
        assert_eq!(evaluate("5/0"), evaluate("5/0"));
    }
}
