//! Tokenizer for the PLCL configuration language.

use std::borrow::Cow;

use crate::{Span, Token, TokenKind};
use tracing::trace;

/// Tokenize a whole document.
///
/// The result always ends with exactly one [`TokenKind::EndOfFile`] token.
///
/// Positions are stored as `u32` byte offsets, so `source` must be smaller
/// than 4 GiB.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}

/// A tokenizer that produces tokens from PLCL source text.
///
/// As an iterator it yields every token including the final
/// [`TokenKind::EndOfFile`], then stops.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
    /// 1-based line of the next character.
    line: u32,
    /// 1-based column of the next character.
    column: u32,
    /// Set once the end-of-file token has been handed out.
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    ///
    /// `source` must be smaller than 4 GiB; see [`tokenize`].
    pub fn new(source: &'src str) -> Self {
        debug_assert!(u32::try_from(source.len()).is_ok(), "source exceeds u32 byte offsets");
        Self {
            source,
            remaining: source,
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    #[inline]
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining.chars().nth(n)
    }

    /// Advance by one character, keeping line and column in step.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        self.remaining = &self.remaining[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip whitespace and `;` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.advance();
                }
                // End of input also ends a comment.
                Some(';') => self.advance_while(|c| c != '\n'),
                _ => break,
            }
        }
    }

    fn token(
        &self,
        kind: TokenKind,
        text: impl Into<Cow<'src, str>>,
        start: Mark,
    ) -> Token<'src> {
        let span = Span::new(start.pos, self.pos);
        let token = Token::new(kind, text, span, start.line, start.column);
        trace!(
            "Token {:?} at {}:{} {:?}",
            token.kind, token.line, token.column, token.text
        );
        token
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Get the next token. Once the input is exhausted this keeps
    /// returning [`TokenKind::EndOfFile`].
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();

        let start = self.mark();
        let Some(c) = self.peek() else {
            return self.token(TokenKind::EndOfFile, "", start);
        };

        match c {
            '=' => {
                self.advance();
                self.token(TokenKind::Equals, "", start)
            }
            '"' => self.tokenize_string(),
            '-' | '0'..='9' => self.tokenize_number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.tokenize_identifier(),
            _ => {
                self.advance();
                let text = &self.source[start.pos as usize..self.pos as usize];
                self.token(TokenKind::Unknown, text, start)
            }
        }
    }

    /// Tokenize a string literal. `\"` is the only escape sequence.
    fn tokenize_string(&mut self) -> Token<'src> {
        let start = self.mark();
        self.advance(); // opening quote

        let content_start = self.pos as usize;
        // Only allocated once an escape shows up.
        let mut owned: Option<String> = None;

        loop {
            match self.peek() {
                None => {
                    // Unterminated: hand the whole tail to the parser as garbage.
                    let text = &self.source[start.pos as usize..self.pos as usize];
                    return self.token(TokenKind::Unknown, text, start);
                }
                Some('"') => {
                    let content_end = self.pos as usize;
                    self.advance();
                    let text = match owned {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(&self.source[content_start..content_end]),
                    };
                    return self.token(TokenKind::StringLiteral, text, start);
                }
                Some('\\') if self.peek_nth(1) == Some('"') => {
                    let buf = owned.get_or_insert_with(|| {
                        self.source[content_start..self.pos as usize].to_string()
                    });
                    buf.push('"');
                    self.advance();
                    self.advance();
                }
                Some(c) => {
                    if let Some(buf) = owned.as_mut() {
                        buf.push(c);
                    }
                    self.advance();
                }
            }
        }
    }

    /// Tokenize a numeric literal: optional `-`, then digits and dots.
    ///
    /// No validation happens here; `1.2.3` and a lone `-` are handed to the
    /// parser, which rejects them when converting.
    fn tokenize_number(&mut self) -> Token<'src> {
        let start = self.mark();
        if self.peek() == Some('-') {
            self.advance();
        }
        self.advance_while(|c| c.is_ascii_digit() || c == '.');
        let text = &self.source[start.pos as usize..self.pos as usize];
        self.token(TokenKind::NumberLiteral, text, start)
    }

    /// Tokenize an identifier, keyword, or boolean literal.
    fn tokenize_identifier(&mut self) -> Token<'src> {
        let start = self.mark();
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let text = &self.source[start.pos as usize..self.pos as usize];

        if text.eq_ignore_ascii_case("true") {
            return self.token(TokenKind::BooleanLiteral, "true", start);
        }
        if text.eq_ignore_ascii_case("false") {
            return self.token(TokenKind::BooleanLiteral, "false", start);
        }
        match TokenKind::from_keyword(text) {
            Some(kind) => self.token(kind, "", start),
            None => self.token(TokenKind::Name, text, start),
        }
    }
}

/// Where a token starts.
#[derive(Clone, Copy)]
struct Mark {
    pos: u32,
    line: u32,
    column: u32,
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}
