#![doc = include_str!("../README.md")]
//! Recursive-descent parsers for PLCL config and template documents.
//!
//! Parsing stops at the first grammar violation and reports it as a
//! [`ParseError`]; no partial tree is ever returned.

mod config;
mod cursor;
mod diagnostic;
mod error;
mod literal;
mod template;
mod verify;

pub use cursor::Cursor;
pub use error::{Expected, ParseError, ParseErrorKind};
pub use plcl_tokenizer::{Span, Token, TokenKind, tokenize};
pub use plcl_tree::{
    AttributeType, ConfigAttribute, ConfigElement, ConfigList, ConfigListElement, ConfigRoot,
    Document, TemplateAttribute, TemplateElement, TemplateList, TemplateListElement,
    TemplateOption, TemplateOptions, TemplateRoot, Value,
};
pub use verify::{VerifyError, verify};

const DOCUMENT_HEADERS: &[TokenKind] = &[TokenKind::ConfigName, TokenKind::TemplateName];

/// Parse a config document.
pub fn parse_config(source: &str) -> Result<ConfigRoot, ParseError> {
    config::config_root(&mut Cursor::new(source))
}

/// Parse a template document.
pub fn parse_template(source: &str) -> Result<TemplateRoot, ParseError> {
    template::template_root(&mut Cursor::new(source))
}

/// Parse either kind of document, chosen by its first token.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let mut cursor = Cursor::new(source);
    match cursor.peek_kind() {
        TokenKind::ConfigName => config::config_root(&mut cursor).map(Document::Config),
        TokenKind::TemplateName => template::template_root(&mut cursor).map(Document::Template),
        _ => Err(cursor.unexpected(Expected::OneOf(DOCUMENT_HEADERS))),
    }
}

/// Parse a config document from an already tokenized sequence.
pub fn config_from_tokens(tokens: Vec<Token<'_>>) -> Result<ConfigRoot, ParseError> {
    config::config_root(&mut Cursor::from_tokens(tokens))
}

/// Parse a template document from an already tokenized sequence.
pub fn template_from_tokens(tokens: Vec<Token<'_>>) -> Result<TemplateRoot, ParseError> {
    template::template_root(&mut Cursor::from_tokens(tokens))
}
