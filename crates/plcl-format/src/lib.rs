#![doc = include_str!("../README.md")]
//! Canonical text output for PLCL trees.
//!
//! Every tree node implements [`Serialize`]. The free functions wrap a
//! [`PlclWriter`] for the common cases.

mod logging;
mod options;
mod scalar;
mod writer;

pub use options::FormatOptions;
pub use scalar::{escape_quoted, format_float, format_value};
pub use writer::PlclWriter;

use plcl_tokenizer::TokenKind;
use plcl_tree::{
    ConfigAttribute, ConfigElement, ConfigList, ConfigListElement, ConfigRoot, Document,
    TemplateAttribute, TemplateElement, TemplateList, TemplateListElement, TemplateOption,
    TemplateOptions, TemplateRoot,
};

/// A tree node that can write itself as PLCL text.
pub trait Serialize {
    /// Write this node, and everything below it, at the writer's current depth.
    fn serialize(&self, writer: &mut PlclWriter);
}

/// Render a node with the given per-level indentation width.
pub fn serialize<T: Serialize + ?Sized>(node: &T, indent_width: usize) -> String {
    format_with(node, &FormatOptions::new().indent_width(indent_width))
}

/// Render a node with the given options.
pub fn format_with<T: Serialize + ?Sized>(node: &T, options: &FormatOptions) -> String {
    let mut writer = PlclWriter::with_options(options.clone());
    node.serialize(&mut writer);
    writer.finish()
}

/// Render a config document.
pub fn format_config(config: &ConfigRoot, options: &FormatOptions) -> String {
    format_with(config, options)
}

/// Render a template document.
pub fn format_template(template: &TemplateRoot, options: &FormatOptions) -> String {
    format_with(template, options)
}

impl Serialize for Document {
    fn serialize(&self, writer: &mut PlclWriter) {
        match self {
            Document::Config(config) => config.serialize(writer),
            Document::Template(template) => template.serialize(writer),
        }
    }
}

impl Serialize for ConfigRoot {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.keyword(TokenKind::ConfigName, Some(&self.name));
        for import in &self.imports {
            writer.import(import);
        }
        for element in &self.elements {
            element.serialize(writer);
        }
        for list in &self.lists {
            list.serialize(writer);
        }
    }
}

impl Serialize for ConfigList {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::ConfigList, Some(&self.name));
        for element in &self.elements {
            element.serialize(writer);
        }
        writer.close(TokenKind::EndConfigList);
    }
}

impl Serialize for ConfigListElement {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::ConfigListElement, Some(&self.id.to_string()));
        self.element.serialize(writer);
        writer.close(TokenKind::EndConfigListElement);
    }
}

impl Serialize for ConfigElement {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::ConfigElement, Some(&self.name));
        for attribute in &self.attributes {
            attribute.serialize(writer);
        }
        for list in &self.lists {
            list.serialize(writer);
        }
        writer.close(TokenKind::EndConfigElement);
    }
}

impl Serialize for ConfigAttribute {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.assignment(&self.name, &self.value);
    }
}

impl Serialize for TemplateRoot {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.keyword(TokenKind::TemplateName, Some(&self.name));
        for element in &self.elements {
            element.serialize(writer);
        }
        for list in &self.lists {
            list.serialize(writer);
        }
    }
}

impl Serialize for TemplateList {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::TemplateList, Some(&self.name));
        if let Some(options) = &self.options {
            write_options(
                writer,
                options,
                TokenKind::TemplateListOptions,
                TokenKind::EndTemplateListOptions,
            );
        }
        for element in &self.elements {
            element.serialize(writer);
        }
        writer.close(TokenKind::EndTemplateList);
    }
}

impl Serialize for TemplateListElement {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::TemplateListElement, Some(&self.id.to_string()));
        self.element.serialize(writer);
        writer.close(TokenKind::EndTemplateListElement);
    }
}

impl Serialize for TemplateElement {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.open(TokenKind::TemplateElement, Some(&self.name));
        if let Some(options) = &self.options {
            write_options(
                writer,
                options,
                TokenKind::TemplateElementOptions,
                TokenKind::EndTemplateElementOptions,
            );
        }
        for attribute in &self.attributes {
            attribute.serialize(writer);
        }
        for list in &self.lists {
            list.serialize(writer);
        }
        writer.close(TokenKind::EndTemplateElement);
    }
}

impl Serialize for TemplateAttribute {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.declaration(self);
    }
}

impl Serialize for TemplateOption {
    fn serialize(&self, writer: &mut PlclWriter) {
        writer.assignment(&self.name, &self.value);
    }
}

/// Options blocks are spelled differently on elements and lists, so they are
/// written by their owner rather than through [`Serialize`].
fn write_options(writer: &mut PlclWriter, options: &TemplateOptions, open: TokenKind, close: TokenKind) {
    writer.open(open, None);
    for option in &options.options {
        option.serialize(writer);
    }
    writer.close(close);
}
