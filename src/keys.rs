//! Key scripts for the text front end.
//!
//! A key script is what a user would press on the keypad, written as text:
//! `12*(3+4)=` types an expression and evaluates it. Named keys are written
//! in angle brackets.

use crate::editor::Action;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// One key per match: a named key in angle brackets or any single character.
    static ref KEY: Regex = Regex::new(r"(?i)<([a-z]+)>|(\S)").unwrap();
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key <{0}>")]
    UnknownNamedKey(String),
    #[error("unknown key '{0}'")]
    UnknownKey(char),
}

/// Translate a key script into editor actions.
///
/// Whitespace is ignored. `=` evaluates, `<` deletes, `c` clears; `x` and `×`
/// multiply, `÷` divides.
pub fn parse_keys(script: &str) -> Result<Vec<Action>, KeyError> {
    KEY.captures_iter(script)
        .map(|caps| {
            if let Some(name) = caps.get(1) {
                return named_key(name.as_str());
            }
            let key = caps
                .get(2)
                .and_then(|m| m.as_str().chars().next())
                .unwrap_or_default();
            single_key(key)
        })
        .collect()
}

fn named_key(name: &str) -> Result<Action, KeyError> {
    match name.to_ascii_lowercase().as_str() {
        "del" | "delete" | "backspace" => Ok(Action::DeleteLast),
        "clear" | "ac" => Ok(Action::Clear),
        "eq" | "enter" => Ok(Action::Evaluate),
        "ans" => Ok(Action::ContinueCalculation),
        _ => Err(KeyError::UnknownNamedKey(name.to_string())),
    }
}

fn single_key(key: char) -> Result<Action, KeyError> {
    match key {
        '=' => Ok(Action::Evaluate),
        '<' => Ok(Action::DeleteLast),
        'c' | 'C' => Ok(Action::Clear),
        'x' | 'X' | '×' => Ok(Action::AddInput('*')),
        '÷' => Ok(Action::AddInput('/')),
        k if crate::calculator::is_expression_char(k) => Ok(Action::AddInput(k)),
        other => Err(KeyError::UnknownKey(other)),
    }
}
