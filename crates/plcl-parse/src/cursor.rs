//! Shared position into the token sequence.

use plcl_tokenizer::{Span, Token, TokenKind, tokenize};

use crate::{Expected, ParseError, ParseErrorKind};

/// A cursor over a token sequence that always ends in
/// [`TokenKind::EndOfFile`].
///
/// Every parse function receives the same cursor and advances it; the cursor
/// never moves past the end-of-file token, so `peek` is always valid.
pub struct Cursor<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Tokenize `source` and start at the first token.
    pub fn new(source: &'src str) -> Self {
        Self::from_tokens(tokenize(source))
    }

    /// Start at the first of `tokens`. A missing end-of-file token is appended.
    pub fn from_tokens(mut tokens: Vec<Token<'src>>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfFile) {
            let (span, line, column) = match tokens.last() {
                Some(last) => (Span::empty(last.span.end), last.line, last.column),
                None => (Span::empty(0), 1, 1),
            };
            tokens.push(Token::new(TokenKind::EndOfFile, "", span, line, column));
        }
        Self { tokens, pos: 0 }
    }

    /// The current token.
    #[inline]
    pub fn peek(&self) -> &Token<'src> {
        &self.tokens[self.pos]
    }

    /// Kind of the current token.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Consume the current token and return it. Stays put on end of file.
    pub fn advance(&mut self) -> &Token<'src> {
        let current = self.pos;
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consume a token of `kind`, or fail without moving.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&Token<'src>, ParseError> {
        if self.peek_kind() != kind {
            return Err(self.unexpected(Expected::Token(kind)));
        }
        Ok(self.advance())
    }

    /// Consume a `Name` token and return its text.
    pub fn expect_name(&mut self) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Name)?.text.to_string())
    }

    /// Unexpected-token error at the current token.
    pub fn unexpected(&self, expected: Expected) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            expected,
            found: self.peek_kind(),
        })
    }

    /// Error of any kind at the current token.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.peek())
    }

    /// Whether the cursor sits on the end-of-file token.
    pub fn at_end(&self) -> bool {
        self.peek_kind() == TokenKind::EndOfFile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_advance_stops_at_eof() {
        let mut cursor = Cursor::new("a");
        assert_eq!(cursor.advance().kind, TokenKind::Name);
        assert_eq!(cursor.advance().kind, TokenKind::EndOfFile);
        assert_eq!(cursor.advance().kind, TokenKind::EndOfFile);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_expect_does_not_move_on_error() {
        let mut cursor = Cursor::new("= x");
        let err = cursor.expect(TokenKind::Name).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: Expected::Token(TokenKind::Name),
                found: TokenKind::Equals,
            }
        );
        assert_eq!((err.line, err.column), (1, 1));
        assert_eq!(cursor.peek_kind(), TokenKind::Equals);
    }

    #[test]
    fn test_from_tokens_appends_eof() {
        let mut tokens = tokenize("x");
        tokens.pop();
        let mut cursor = Cursor::from_tokens(tokens);
        cursor.advance();
        assert!(cursor.at_end());

        let cursor = Cursor::from_tokens(Vec::new());
        assert!(cursor.at_end());
    }
}
