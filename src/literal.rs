//! Literal values embedded in log records
//!
//! Two record payloads carry a literal sub-grammar instead of plain tokens:
//! the `Config` record holds a JSON object, and the best-individual records
//! hold a bracketed list of integers, floats and booleans (possibly nested,
//! booleans in either case). The log text is untrusted, so the list grammar
//! gets a dedicated recursive-descent decoder rather than any kind of
//! general expression evaluation:
//!
//! ```text
//! list  := '[' (value (',' value)*)? ']'
//! value := list | float | integer | boolean
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Nesting beyond this many list levels fails instead of recursing further.
const MAX_LIST_DEPTH: usize = 64;

/// A parsed literal value.
///
/// Serialized untagged, so a `Literal` round-trips through JSON as the
/// plain value it denotes (`[1, 0.5, true]` stays `[1, 0.5, true]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Integer scalar
    Int(i64),
    /// Float scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// List of literals
    List(Vec<Literal>),
}

impl Default for Literal {
    /// The empty list, matching an unset best-individual field.
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Debug formatting keeps the decimal point on round values.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Literal {
    /// View as a list, if this literal is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for the empty list (the default for unset fields).
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }
}

/// Literal grammar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Input ended inside a list or before one started
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A character outside the grammar at the given byte offset
    #[error("unexpected character {found:?} at byte {at}")]
    Unexpected {
        /// The character found
        found: char,
        /// Byte offset into the payload
        at: usize,
    },

    /// A scalar token that is neither a boolean nor a valid number
    #[error("invalid number token {token:?}")]
    InvalidNumber {
        /// The offending token
        token: String,
    },

    /// Input continued after the closing bracket
    #[error("trailing input after list: {rest:?}")]
    TrailingInput {
        /// What followed the list
        rest: String,
    },

    /// Lists nested past the depth cap
    #[error("list nesting too deep")]
    TooDeep,

    /// The config payload is not a JSON object
    #[error("invalid config JSON: {0}")]
    Config(String),
}

/// Parse a `Config` payload: a strict JSON object.
///
/// # Errors
///
/// Returns [`LiteralError::Config`] if the payload is not valid JSON or is
/// valid JSON but not an object.
pub fn parse_config(text: &str) -> Result<Map<String, Value>, LiteralError> {
    serde_json::from_str(text).map_err(|e| LiteralError::Config(e.to_string()))
}

/// Parse a bracketed list literal such as `[1, 0.5, [true, false]]`.
///
/// Booleans are matched ASCII-case-insensitively; the runner has emitted
/// both `true` and `True` over its lifetime. A numeric token without a
/// fractional or exponent part parses as [`Literal::Int`], otherwise as
/// [`Literal::Float`].
///
/// # Errors
///
/// Returns a [`LiteralError`] on malformed brackets, trailing commas,
/// unknown tokens, input after the closing bracket, or nesting past the
/// depth cap.
pub fn parse_list(text: &str) -> Result<Literal, LiteralError> {
    let mut scanner = Scanner { src: text, pos: 0 };
    scanner.skip_ws();
    let value = scanner.list(0)?;
    scanner.skip_ws();
    if scanner.at_end() {
        Ok(value)
    } else {
        Err(LiteralError::TrailingInput {
            rest: scanner.rest().to_string(),
        })
    }
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.bump();
        }
    }

    /// Error for the character at the current position.
    fn unexpected(&self) -> LiteralError {
        self.rest().chars().next().map_or(
            LiteralError::UnexpectedEnd,
            |found| LiteralError::Unexpected {
                found,
                at: self.pos,
            },
        )
    }

    fn list(&mut self, depth: usize) -> Result<Literal, LiteralError> {
        if depth >= MAX_LIST_DEPTH {
            return Err(LiteralError::TooDeep);
        }
        match self.peek() {
            Some(b'[') => self.bump(),
            Some(_) => return Err(self.unexpected()),
            None => return Err(LiteralError::UnexpectedEnd),
        }
        self.skip_ws();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Literal::List(items));
        }
        loop {
            items.push(self.value(depth)?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_ws();
                    // A ']' here would mean a trailing comma.
                    if self.peek() == Some(b']') {
                        return Err(self.unexpected());
                    }
                }
                Some(b']') => {
                    self.bump();
                    return Ok(Literal::List(items));
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal, LiteralError> {
        match self.peek() {
            Some(b'[') => self.list(depth + 1),
            Some(_) => self.scalar(),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    fn scalar(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, b',' | b']' | b'[' | b' ' | b'\t') {
                break;
            }
            self.bump();
        }
        let token = &self.src[start..self.pos];
        if token.is_empty() {
            return Err(self.unexpected());
        }
        if token.eq_ignore_ascii_case("true") {
            return Ok(Literal::Bool(true));
        }
        if token.eq_ignore_ascii_case("false") {
            return Ok(Literal::Bool(false));
        }
        let number = if token.contains(['.', 'e', 'E']) {
            token.parse::<f64>().ok().map(Literal::Float)
        } else {
            token.parse::<i64>().ok().map(Literal::Int)
        };
        number.ok_or_else(|| LiteralError::InvalidNumber {
            token: token.to_string(),
        })
    }
}
