//! Line-oriented output writer.
//!
//! Every PLCL construct sits on its own line, so the writer only tracks the
//! current indentation. Blocks are written with [`PlclWriter::open`] and
//! [`PlclWriter::close`], which step the indentation in and out.

use plcl_tokenizer::TokenKind;
use plcl_tree::{AttributeType, TemplateAttribute, Value};

use crate::logging::trace_keyword;
use crate::options::FormatOptions;
use crate::scalar::{escape_quoted, format_value};

/// Low-level PLCL output writer.
pub struct PlclWriter {
    out: String,
    options: FormatOptions,
    depth: usize,
}

impl PlclWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a new writer with the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            out: String::new(),
            options,
            depth: 0,
        }
    }

    /// Consume the writer and return the output.
    pub fn finish(self) -> String {
        self.out
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn line(&mut self, text: &str) {
        let indent = self.options.indent_start + self.depth * self.options.indent_width;
        self.out.extend(std::iter::repeat_n(' ', indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Write a keyword, optionally followed by a name or other argument.
    pub fn keyword(&mut self, kind: TokenKind, argument: Option<&str>) {
        trace_keyword!(kind, argument, self.depth);
        let keyword = spelling(kind);
        match argument {
            Some(argument) => self.line(&format!("{keyword} {argument}")),
            None => self.line(keyword),
        }
    }

    /// Write an opening keyword and step in.
    pub fn open(&mut self, kind: TokenKind, argument: Option<&str>) {
        self.keyword(kind, argument);
        self.depth += 1;
    }

    /// Step out and write a closing keyword.
    pub fn close(&mut self, kind: TokenKind) {
        self.depth = self.depth.saturating_sub(1);
        self.keyword(kind, None);
    }

    /// `Import "path"`
    pub fn import(&mut self, path: &str) {
        self.keyword(TokenKind::Import, Some(&format!("\"{}\"", escape_quoted(path))));
    }

    /// `name = value`, used for config attributes and template options.
    pub fn assignment(&mut self, name: &str, value: &Value) {
        self.line(&format!("{name} = {}", format_value(value)));
    }

    /// `<type> name [required] [default <literal>]`
    pub fn declaration(&mut self, attribute: &TemplateAttribute) {
        let ty = match attribute.ty {
            AttributeType::String => TokenKind::String,
            AttributeType::Integer => TokenKind::Integer,
            AttributeType::Float => TokenKind::Float,
            AttributeType::Boolean => TokenKind::Boolean,
        };
        let mut text = format!("{} {}", spelling(ty), attribute.name);
        if attribute.required {
            text.push_str(" required");
        }
        if let Some(raw) = &attribute.default_value {
            text.push_str(" default ");
            if attribute.ty == AttributeType::String {
                text.push('"');
                text.push_str(&escape_quoted(raw));
                text.push('"');
            } else {
                text.push_str(raw);
            }
        }
        self.line(&text);
    }
}

impl Default for PlclWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical spelling of a keyword token.
fn spelling(kind: TokenKind) -> &'static str {
    kind.keyword().unwrap_or_else(|| kind.name())
}
