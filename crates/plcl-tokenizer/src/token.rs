//! Token types for the PLCL tokenizer.

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Always the last token.
    EndOfFile,
    /// `=`
    Equals,
    /// Identifier that is not a keyword.
    Name,
    /// `"..."`
    StringLiteral,
    /// `-12`, `3.14`
    NumberLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `Import`
    Import,

    // Attribute types (template documents)
    /// `string`
    String,
    /// `int`
    Integer,
    /// `float`
    Float,
    /// `bool`
    Boolean,

    // Config structure
    ConfigName,
    ConfigElement,
    EndConfigElement,
    ConfigListElement,
    EndConfigListElement,
    ConfigList,
    EndConfigList,

    // Template structure
    TemplateName,
    TemplateElement,
    EndTemplateElement,
    TemplateListElement,
    EndTemplateListElement,
    TemplateList,
    EndTemplateList,
    TemplateElementOptions,
    EndTemplateElementOptions,
    TemplateListOptions,
    EndTemplateListOptions,

    /// Any character the tokenizer does not recognize, or an unterminated string.
    Unknown,
}

/// Keyword spellings, canonical case first. Matching is case-insensitive.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("Import", TokenKind::Import),
    ("string", TokenKind::String),
    ("int", TokenKind::Integer),
    ("float", TokenKind::Float),
    ("bool", TokenKind::Boolean),
    ("ConfigName", TokenKind::ConfigName),
    ("ConfigElement", TokenKind::ConfigElement),
    ("endConfigElement", TokenKind::EndConfigElement),
    ("ConfigListElement", TokenKind::ConfigListElement),
    ("endConfigListElement", TokenKind::EndConfigListElement),
    ("ConfigList", TokenKind::ConfigList),
    ("endConfigList", TokenKind::EndConfigList),
    ("TemplateName", TokenKind::TemplateName),
    ("TemplateElement", TokenKind::TemplateElement),
    ("endTemplateElement", TokenKind::EndTemplateElement),
    ("TemplateListElement", TokenKind::TemplateListElement),
    ("endTemplateListElement", TokenKind::EndTemplateListElement),
    ("TemplateList", TokenKind::TemplateList),
    ("endTemplateList", TokenKind::EndTemplateList),
    ("TemplateElementOptions", TokenKind::TemplateElementOptions),
    ("endTemplateElementOptions", TokenKind::EndTemplateElementOptions),
    ("TemplateListOptions", TokenKind::TemplateListOptions),
    ("endTemplateListOptions", TokenKind::EndTemplateListOptions),
];

impl TokenKind {
    /// Look up a keyword, ignoring ASCII case. Only whole identifiers match.
    pub fn from_keyword(ident: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(ident))
            .map(|&(_, kind)| kind)
    }

    /// Canonical spelling of a keyword token, `None` for everything else.
    pub fn keyword(&self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|&(spelling, _)| spelling)
    }

    /// Whether this token can be the value of an attribute or option.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::BooleanLiteral
        )
    }

    /// Whether this token starts a typed attribute declaration.
    pub fn is_attribute_type(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Integer | TokenKind::Float | TokenKind::Boolean
        )
    }

    /// Name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Equals => "Equals",
            TokenKind::Name => "Name",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::Import => "Import",
            TokenKind::String => "String",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Boolean => "Boolean",
            TokenKind::ConfigName => "ConfigName",
            TokenKind::ConfigElement => "ConfigElement",
            TokenKind::EndConfigElement => "EndConfigElement",
            TokenKind::ConfigListElement => "ConfigListElement",
            TokenKind::EndConfigListElement => "EndConfigListElement",
            TokenKind::ConfigList => "ConfigList",
            TokenKind::EndConfigList => "EndConfigList",
            TokenKind::TemplateName => "TemplateName",
            TokenKind::TemplateElement => "TemplateElement",
            TokenKind::EndTemplateElement => "EndTemplateElement",
            TokenKind::TemplateListElement => "TemplateListElement",
            TokenKind::EndTemplateListElement => "EndTemplateListElement",
            TokenKind::TemplateList => "TemplateList",
            TokenKind::EndTemplateList => "EndTemplateList",
            TokenKind::TemplateElementOptions => "TemplateElementOptions",
            TokenKind::EndTemplateElementOptions => "EndTemplateElementOptions",
            TokenKind::TemplateListOptions => "TemplateListOptions",
            TokenKind::EndTemplateListOptions => "EndTemplateListOptions",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, position, and payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// Payload for names and literals, the offending text for `Unknown`,
    /// empty for keywords, `=` and end of file.
    ///
    /// String literals carry their content without quotes and with `\"`
    /// already unescaped, so the text is only borrowed when no escape was seen.
    pub text: Cow<'src, str>,
    /// Byte range in the source, including quotes for string literals.
    pub span: Span,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl<'src> Token<'src> {
    pub fn new(
        kind: TokenKind,
        text: impl Into<Cow<'src, str>>,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            line,
            column,
        }
    }
}
