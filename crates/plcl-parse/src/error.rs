//! Structural parse errors.

use std::fmt;

use plcl_tokenizer::{Span, Token, TokenKind};
use plcl_tree::AttributeType;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A single token kind.
    Token(TokenKind),
    /// Any of several token kinds.
    OneOf(&'static [TokenKind]),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write_kind(f, *kind),
            Expected::OneOf(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(if i + 1 == kinds.len() { " or " } else { ", " })?;
                    }
                    write_kind(f, *kind)?;
                }
                Ok(())
            }
        }
    }
}

/// Keywords are quoted in their canonical spelling, other kinds use their name.
fn write_kind(f: &mut fmt::Formatter<'_>, kind: TokenKind) -> fmt::Result {
    match (kind, kind.keyword()) {
        (TokenKind::Equals, _) => f.write_str("\"=\""),
        (_, Some(spelling)) => write!(f, "\"{spelling}\""),
        (_, None) => f.write_str(kind.name()),
    }
}

/// Parse error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Grammar violation: the next token cannot appear here.
    UnexpectedToken { expected: Expected, found: TokenKind },
    /// A second options block on the same element or list.
    DuplicateOptions { found: TokenKind },
    /// A second element inside one list element.
    DuplicateElement { found: TokenKind },
    /// A `default` literal whose kind does not fit the declared type.
    DefaultTypeMismatch {
        attribute: AttributeType,
        found: TokenKind,
    },
    /// A numeric literal that does not convert: a lone `-`, several dots,
    /// out of range, or a fraction where an integer is required.
    InvalidNumber {
        text: String,
        expected: AttributeType,
    },
}

/// A structural parse error at a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Byte range of the offending token.
    pub span: Span,
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column of the offending token.
    pub column: u32,
}

impl ParseError {
    /// Create an error located at `token`.
    pub fn new(kind: ParseErrorKind, token: &Token<'_>) -> Self {
        Self {
            kind,
            span: token.span,
            line: token.line,
            column: token.column,
        }
    }

    /// Description of what was expected at the error position.
    pub fn expected(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => expected.to_string(),
            ParseErrorKind::DuplicateOptions { found } => format!("a single {found} block"),
            ParseErrorKind::DuplicateElement { found } => format!("a single {found}"),
            ParseErrorKind::DefaultTypeMismatch { attribute, .. } => {
                default_literal_for(*attribute).to_string()
            }
            ParseErrorKind::InvalidNumber { expected, .. } => {
                format!("a valid {} literal", expected.name())
            }
        }
    }

    /// Kind of the token the error points at.
    pub fn found(&self) -> TokenKind {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, .. }
            | ParseErrorKind::DuplicateOptions { found }
            | ParseErrorKind::DuplicateElement { found }
            | ParseErrorKind::DefaultTypeMismatch { found, .. } => *found,
            ParseErrorKind::InvalidNumber { .. } => TokenKind::NumberLiteral,
        }
    }

    /// Short message without the position, used as the diagnostic headline.
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                format!("expected {expected} but found {found}")
            }
            ParseErrorKind::DuplicateOptions { found }
            | ParseErrorKind::DuplicateElement { found } => format!("{found} already set"),
            ParseErrorKind::DefaultTypeMismatch { attribute, found } => format!(
                "expected {} for {attribute} default but found {found}",
                default_literal_for(*attribute)
            ),
            ParseErrorKind::InvalidNumber { text, expected } => {
                format!("invalid {} literal `{text}`", expected.name())
            }
        }
    }
}

/// Literal accepted after `default` for an attribute type.
pub(crate) fn default_literal_for(ty: AttributeType) -> &'static str {
    match ty {
        AttributeType::String => "StringLiteral",
        AttributeType::Integer => "integer NumberLiteral",
        AttributeType::Float => "NumberLiteral",
        AttributeType::Boolean => "BooleanLiteral",
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {} column {}",
            self.message(),
            self.line,
            self.column
        )
    }
}

impl std::error::Error for ParseError {}
