//! Parsing for the free-text purchase-amount field.
//!
//! The amount input doubles as a tiny calculator ("120+35", "12*3"), so
//! parsing goes through a small infix evaluator instead of `str::parse`.
//! Everything that does not evaluate to a finite positive number is
//! rejected, which callers surface by disabling the add action.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("expression ends unexpectedly")]
    UnexpectedEnd,
    #[error("unexpected trailing input")]
    TrailingInput,
    #[error("amount is not a finite number")]
    NotFinite,
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Evaluates a purchase-amount expression.
///
/// Supports decimal literals, `+ - * /` with the usual precedence,
/// parentheses, and unary minus. Only finite results strictly greater than
/// zero are accepted.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let mut parser = Parser::new(input);
    if parser.peek().is_none() {
        return Err(AmountError::Empty);
    }
    let value = parser.expression()?;
    if parser.peek().is_some() {
        return Err(AmountError::TrailingInput);
    }
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Next significant character, skipping whitespace.
    fn peek(&mut self) -> Option<char> {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                return Some(c);
            }
        }
        None
    }

    fn bump(&mut self) -> Option<char> {
        self.peek()?;
        self.chars.next()
    }

    fn expression(&mut self) -> Result<f64, AmountError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                '+' => {
                    self.bump();
                    value += self.term()?;
                }
                '-' => {
                    self.bump();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, AmountError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                '*' => {
                    self.bump();
                    value *= self.factor()?;
                }
                '/' => {
                    self.bump();
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, AmountError> {
        match self.peek() {
            None => Err(AmountError::UnexpectedEnd),
            Some('-') => {
                self.bump();
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.bump();
                let value = self.expression()?;
                match self.bump() {
                    Some(')') => Ok(value),
                    Some(c) => Err(AmountError::UnexpectedChar(c)),
                    None => Err(AmountError::UnexpectedEnd),
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(AmountError::UnexpectedChar(c)),
        }
    }

    fn number(&mut self) -> Result<f64, AmountError> {
        let mut literal = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                literal.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        literal
            .parse::<f64>()
            .map_err(|_| AmountError::UnexpectedChar('.'))
    }
}
