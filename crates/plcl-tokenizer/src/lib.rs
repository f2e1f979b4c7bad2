#![doc = include_str!("../README.md")]

mod span;
pub use span::Span;

mod token;
pub use token::{KEYWORDS, Token, TokenKind};

mod tokenizer;
pub use tokenizer::{Tokenizer, tokenize};
