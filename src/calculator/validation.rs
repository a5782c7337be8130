//! Token admissibility for the live expression editor.
//!
//! Decides, for the current expression and a single incoming character,
//! whether the character may be typed and what the expression becomes.
//! Rules are kept as an ordered list: the first rule that has an opinion
//! wins, and a token no rule objects to is appended verbatim.

use super::error::Rejection;
use super::evaluation::MAX_EXPRESSION_LENGTH;
use tracing::trace;

/// Binary operators the editor accepts.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Characters after which a number or group starts fresh.
const SEGMENT_BREAKS: [char; 5] = ['+', '-', '*', '/', '('];

/// Outcome of a rule that matched.
enum Verdict {
    Reject(Rejection),
    Rewrite(String),
}

type Rule = fn(&str, char) -> Option<Verdict>;

/// Evaluated top to bottom.
const RULES: &[(&str, Rule)] = &[
    ("alphabet", alphabet),
    ("length", length),
    ("decimal-point", decimal_point),
    ("leading-operator", leading_operator),
    ("closing-bracket", closing_bracket),
    ("opening-bracket", opening_bracket),
    ("implicit-group-pivot", implicit_group_pivot),
    ("operator-sequence", operator_sequence),
];

/// Whether `token` is one of `+ - * /`.
pub fn is_operator(token: char) -> bool {
    OPERATORS.contains(&token)
}

/// Whether `token` belongs to the expression alphabet.
pub fn is_expression_char(token: char) -> bool {
    token.is_ascii_digit() || token == '.' || token == '(' || token == ')' || is_operator(token)
}

/// Check whether `token` may be typed after `expression`.
pub fn can_append(expression: &str, token: char) -> bool {
    try_append(expression, token).is_ok()
}

/// Apply `token` to `expression`, returning the rewritten expression or the
/// reason the token was refused.
///
/// This is a pure function: the input expression is never modified.
pub fn try_append(expression: &str, token: char) -> Result<String, Rejection> {
    for (name, rule) in RULES {
        match rule(expression, token) {
            Some(Verdict::Reject(reason)) => {
                trace!(rule = name, %token, %reason, "token rejected");
                return Err(reason);
            }
            Some(Verdict::Rewrite(rewritten)) => {
                trace!(rule = name, %token, %rewritten, "token rewritten");
                return Ok(rewritten);
            }
            None => {}
        }
    }

    let mut appended = String::with_capacity(expression.len() + 1);
    appended.push_str(expression);
    appended.push(token);
    Ok(appended)
}

/// Count of `(` minus count of `)`.
pub fn open_bracket_depth(expression: &str) -> i64 {
    expression.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

fn alphabet(_expression: &str, token: char) -> Option<Verdict> {
    (!is_expression_char(token)).then_some(Verdict::Reject(Rejection::UnknownToken(token)))
}

fn length(expression: &str, _token: char) -> Option<Verdict> {
    // Rewrites can add at most one character beyond the token.
    (expression.chars().count() + 2 > MAX_EXPRESSION_LENGTH)
        .then_some(Verdict::Reject(Rejection::TooLong(MAX_EXPRESSION_LENGTH)))
}

fn decimal_point(expression: &str, token: char) -> Option<Verdict> {
    if token != '.' {
        return None;
    }

    match expression.chars().last() {
        None | Some('(') => return Some(Verdict::Reject(Rejection::LeadingDecimal)),
        _ => {}
    }

    let segment = expression
        .rfind(&SEGMENT_BREAKS[..])
        .map_or(expression, |idx| &expression[idx + 1..]);
    segment
        .contains('.')
        .then_some(Verdict::Reject(Rejection::DuplicateDecimal))
}

fn leading_operator(expression: &str, token: char) -> Option<Verdict> {
    (expression.is_empty() && matches!(token, '+' | '*' | '/'))
        .then_some(Verdict::Reject(Rejection::LeadingOperator(token)))
}

fn closing_bracket(expression: &str, token: char) -> Option<Verdict> {
    if token != ')' {
        return None;
    }

    if open_bracket_depth(expression) <= 0 {
        return Some(Verdict::Reject(Rejection::UnmatchedClose));
    }

    match expression.chars().last() {
        Some(last) if last == '(' || is_operator(last) => {
            Some(Verdict::Reject(Rejection::EmptyGroup(last)))
        }
        _ => None,
    }
}

fn opening_bracket(expression: &str, token: char) -> Option<Verdict> {
    if token != '(' {
        return None;
    }

    let last = expression.chars().last()?;
    if last.is_ascii_digit() || last == ')' {
        return Some(Verdict::Rewrite(format!("{expression}*(")));
    }

    match last {
        '(' => Some(Verdict::Reject(Rejection::ConsecutiveOperator { last, token })),
        // A binary `+ - /` followed by a group collapses to multiplication.
        // A unary minus keeps its group: `-(` and `5*-(` stay as typed.
        '+' | '-' | '/' if follows_operand(expression) => {
            let head = &expression[..expression.len() - 1];
            Some(Verdict::Rewrite(format!("{head}*(")))
        }
        _ => None,
    }
}

fn implicit_group_pivot(expression: &str, token: char) -> Option<Verdict> {
    if !matches!(token, '+' | '*' | '/') {
        return None;
    }

    let head = expression.strip_suffix("*(")?;
    Some(Verdict::Rewrite(format!("{head}{token}")))
}

fn operator_sequence(expression: &str, token: char) -> Option<Verdict> {
    if !is_operator(token) {
        return None;
    }

    let last = expression.chars().last()?;
    if !SEGMENT_BREAKS.contains(&last) {
        return None;
    }

    // Negative numbers may start after any operator or open bracket.
    if token == '-' {
        return Some(Verdict::Rewrite(format!("{expression}-")));
    }

    if last == '(' {
        return Some(Verdict::Reject(Rejection::ConsecutiveOperator { last, token }));
    }

    let head = expression.trim_end_matches(&OPERATORS[..]);
    let run = &expression[head.len()..];
    let operand_before = head
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit() || c == ')' || c == '.');

    if !operand_before || (run.len() == 1 && last == token) {
        return Some(Verdict::Reject(Rejection::ConsecutiveOperator { last, token }));
    }

    Some(Verdict::Rewrite(format!("{head}{token}")))
}

/// Whether the trailing operator of `expression` sits right after a number
/// or a closed group, i.e. is binary rather than a sign.
fn follows_operand(expression: &str) -> bool {
    let mut chars = expression.chars().rev();
    chars.next();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == ')' || c == '.')
}
