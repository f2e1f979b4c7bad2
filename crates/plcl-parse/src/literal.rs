//! Literal conversion shared by both grammars.

use plcl_tokenizer::{Token, TokenKind};
use plcl_tree::{AttributeType, Value};

use crate::{Cursor, Expected, ParseError, ParseErrorKind};

pub(crate) const LITERALS: &[TokenKind] = &[
    TokenKind::StringLiteral,
    TokenKind::NumberLiteral,
    TokenKind::BooleanLiteral,
];

/// Consume a string, number, or boolean literal.
pub(crate) fn literal(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let token = cursor.peek();
    let value = match token.kind {
        TokenKind::StringLiteral => Value::String(token.text.to_string()),
        TokenKind::NumberLiteral => number(token)?,
        TokenKind::BooleanLiteral => Value::Boolean(token.text == "true"),
        _ => return Err(cursor.unexpected(Expected::OneOf(LITERALS))),
    };
    cursor.advance();
    Ok(value)
}

/// A dot makes a float, anything else is an integer.
pub(crate) fn number(token: &Token<'_>) -> Result<Value, ParseError> {
    if token.text.contains('.') {
        float(token).map(Value::Float)
    } else {
        integer(token).map(Value::Integer)
    }
}

pub(crate) fn integer(token: &Token<'_>) -> Result<i64, ParseError> {
    token
        .text
        .parse::<i64>()
        .map_err(|_| invalid(token, AttributeType::Integer))
}

/// Only finite values are accepted, so every float can be written back out.
pub(crate) fn float(token: &Token<'_>) -> Result<f64, ParseError> {
    match token.text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(invalid(token, AttributeType::Float)),
    }
}

fn invalid(token: &Token<'_>, expected: AttributeType) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidNumber {
            text: token.text.to_string(),
            expected,
        },
        token,
    )
}
