//! Tokenizer and recursive descent parser for arithmetic expressions.
//!
//! GRAMMAR:
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> "-" unary | primary
//!   primary        --> NUMBER | "(" expression ")"
//!
//! Whitespace between tokens is ignored. Nesting of `-` and `(` is limited
//! to [`MAX_DEPTH`] levels.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Tokens produced by the [`Lexer`].
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Asterisk,
    Slash,
    LParen,
    RParen,
    Eof,
    Illegal(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Eof => write!(f, "end of input"),
            Token::Illegal(text) => write!(f, "{text}"),
        }
    }
}

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        while self.input.next_if(|c| c.is_whitespace()).is_some() {}

        match self.input.next() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('*') => Token::Asterisk,
            Some('/') => Token::Slash,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch),
            Some(ch) => Token::Illegal(ch.to_string()),
            None => Token::Eof,
        }
    }

    fn read_number(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(ch) = self.input.next_if(|c| c.is_ascii_digit() || *c == '.') {
            text.push(ch);
        }

        match text.parse::<f64>() {
            Ok(value) => Token::Number(value),
            Err(_) => Token::Illegal(text),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Parsed expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Computes the value in double precision. Division by zero yields an
    /// infinity or NaN rather than an error; callers decide what to do with
    /// non-finite values.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Negate(inner) => -inner.eval(),
            Expr::Binary { left, op, right } => {
                let (l, r) = (left.eval(), right.eval());
                match op {
                    BinaryOperator::Add => l + r,
                    BinaryOperator::Subtract => l - r,
                    BinaryOperator::Multiply => l * r,
                    BinaryOperator::Divide => l / r,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of unary minus and brackets the parser accepts.
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            depth: 0,
        }
    }

    /// Parses the entire input; trailing tokens are an error.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        if self.current_token == Token::Eof {
            return Err(ParseError::new("empty expression"));
        }

        let expr = self.parse_additive()?;

        if self.current_token != Token::Eof {
            return Err(ParseError::new(format!(
                "unexpected '{}' after expression",
                self.current_token
            )));
        }

        Ok(expr)
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Enter one nesting level; fails past [`MAX_DEPTH`].
    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(format!(
                "nesting deeper than {MAX_DEPTH} levels"
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.current_token == Token::Minus {
            self.advance();
            self.descend()?;
            let operand = self.parse_unary();
            self.depth -= 1;
            return Ok(Expr::Negate(Box::new(operand?)));
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current_token.clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Token::LParen => {
                self.advance();
                self.descend()?;
                let inner = self.parse_additive();
                self.depth -= 1;
                let inner = inner?;
                if self.current_token != Token::RParen {
                    return Err(ParseError::new(format!(
                        "expected ')', found '{}'",
                        self.current_token
                    )));
                }
                self.advance();
                Ok(inner)
            }
            other => Err(ParseError::new(format!("unexpected '{other}'"))),
        }
    }
}

/// Convenience function to parse a string into an expression tree.
pub fn parse(input: &str) -> ParseResult<Expr> {
    Parser::new(input).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(input: &str) -> f64 {
        parse(input).unwrap().eval()
    }

    #[test]
    fn test_lexer_tokens() {
        let mut lexer = Lexer::new(" 12.5*(3) ");
        assert_eq!(lexer.next_token(), Token::Number(12.5));
        assert_eq!(lexer.next_token(), Token::Asterisk);
        assert_eq!(lexer.next_token(), Token::LParen);
        assert_eq!(lexer.next_token(), Token::Number(3.0));
        assert_eq!(lexer.next_token(), Token::RParen);
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn test_malformed_number_is_illegal() {
        let mut lexer = Lexer::new("1.2.3");
        assert_eq!(lexer.next_token(), Token::Illegal("1.2.3".to_string()));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(value("2+3*4"), 14.0);
        assert_eq!(value("(2+3)*4"), 20.0);
        assert_eq!(value("((2+3)*4)/2"), 10.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(value("10-3-2"), 5.0);
        assert_eq!(value("16/4/2"), 2.0);
        assert_eq!(value("8/2*4"), 16.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(value("-5"), -5.0);
        assert_eq!(value("5--3"), 8.0);
        assert_eq!(value("-(2+3)*2"), -10.0);
        assert_eq!(value("2*-3"), -6.0);
        assert_eq!(value("--4"), 4.0);
    }

    #[test]
    fn test_tree_shape() {
        let expr = parse("1-2*3").unwrap();
        assert_eq!(
            expr,
            Expr::Binary {
                left: Box::new(Expr::Number(1.0)),
                op: BinaryOperator::Subtract,
                right: Box::new(Expr::Binary {
                    left: Box::new(Expr::Number(2.0)),
                    op: BinaryOperator::Multiply,
                    right: Box::new(Expr::Number(3.0)),
                }),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("5+").is_err());
        assert!(parse("(2)3").is_err());
        assert!(parse("(2").is_err());
        assert!(parse("2^3").is_err());
        assert!(parse("+5").is_err());
    }

    #[test]
    fn test_nesting_within_limit() {
        let nested = format!("{}5{}", "(-".repeat(100), ")".repeat(100));
        assert_eq!(value(&nested), 5.0);
    }

    #[test]
    fn test_nesting_past_limit_is_an_error() {
        let brackets = format!("{}5{}", "(-".repeat(10_000), ")".repeat(10_000));
        assert!(parse(&brackets).is_err());

        let signs = format!("{}5", "-".repeat(MAX_DEPTH + 1));
        assert!(parse(&signs).is_err());
        let signs = format!("{}5", "-".repeat(MAX_DEPTH));
        assert_eq!(value(&signs), 5.0);
    }

    #[test]
    fn test_division_by_zero_is_not_a_parse_error() {
        assert!(value("5/0").is_infinite());
        assert!(value("0/0").is_nan());
    }
}
