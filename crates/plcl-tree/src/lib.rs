#![doc = include_str!("../README.md")]

mod config;
mod template;
mod value;

pub use config::{ConfigAttribute, ConfigElement, ConfigList, ConfigListElement, ConfigRoot};
pub use template::{
    TemplateAttribute, TemplateElement, TemplateList, TemplateListElement, TemplateOption,
    TemplateOptions, TemplateRoot,
};
pub use value::{AttributeType, Value};

/// Either kind of parsed document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
#[repr(u8)]
pub enum Document {
    Config(ConfigRoot),
    Template(TemplateRoot),
}

impl Document {
    /// The name after `ConfigName` or `TemplateName`.
    pub fn name(&self) -> &str {
        match self {
            Document::Config(root) => &root.name,
            Document::Template(root) => &root.name,
        }
    }

    pub fn as_config(&self) -> Option<&ConfigRoot> {
        match self {
            Document::Config(root) => Some(root),
            Document::Template(_) => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateRoot> {
        match self {
            Document::Template(root) => Some(root),
            Document::Config(_) => None,
        }
    }
}

impl From<ConfigRoot> for Document {
    fn from(root: ConfigRoot) -> Self {
        Document::Config(root)
    }
}

impl From<TemplateRoot> for Document {
    fn from(root: TemplateRoot) -> Self {
        Document::Template(root)
    }
}
