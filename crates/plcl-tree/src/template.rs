//! Template document tree.
//!
//! Templates mirror the config tree, with two additions: elements declare
//! typed attributes instead of holding values, and elements and lists may
//! carry one free-form options block.
//!
//! ```text
//! TemplateElement Server
//!     TemplateElementOptions
//!         required = true               -> TemplateOption
//!     endTemplateElementOptions
//!     string host required              -> TemplateAttribute
//!     int port default 8080
//! endTemplateElement
//! ```

use crate::{AttributeType, Value};

/// Root of a template document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateRoot {
    /// Name given after `TemplateName`.
    pub name: String,
    pub elements: Vec<TemplateElement>,
    pub lists: Vec<TemplateList>,
}

/// Template counterpart of a config list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateList {
    pub name: String,
    /// `TemplateListOptions` block, at most one.
    pub options: Option<TemplateOptions>,
    pub elements: Vec<TemplateListElement>,
}

/// One entry of a [`TemplateList`]: an id label and exactly one element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateListElement {
    pub id: i64,
    pub element: TemplateElement,
}

/// Template counterpart of a config element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateElement {
    pub name: String,
    /// `TemplateElementOptions` block, at most one.
    pub options: Option<TemplateOptions>,
    pub attributes: Vec<TemplateAttribute>,
    pub lists: Vec<TemplateList>,
}

/// An options block. Option names are not interpreted here.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateOptions {
    pub options: Vec<TemplateOption>,
}

/// `name = value` inside an options block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateOption {
    pub name: String,
    pub value: Value,
}

/// A typed attribute declaration: `int port required default 8080`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct TemplateAttribute {
    pub ty: AttributeType,
    pub name: String,
    /// Raw text of the `default` literal. String defaults hold the unquoted
    /// content; the parser guarantees the literal kind matches `ty`.
    pub default_value: Option<String>,
    pub required: bool,
}

impl TemplateRoot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: TemplateElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_list(mut self, list: TemplateList) -> Self {
        self.lists.push(list);
        self
    }

    /// First top-level element declaration with the given name.
    pub fn element(&self, name: &str) -> Option<&TemplateElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// First top-level list declaration with the given name.
    pub fn list(&self, name: &str) -> Option<&TemplateList> {
        self.lists.iter().find(|l| l.name == name)
    }
}

impl TemplateList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
            elements: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: TemplateOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_element(mut self, id: i64, element: TemplateElement) -> Self {
        self.elements.push(TemplateListElement { id, element });
        self
    }

    pub fn get(&self, id: i64) -> Option<&TemplateElement> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.element)
    }

    /// Look up an option value on this list.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|o| o.get(name))
    }
}

impl TemplateElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
            attributes: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: TemplateOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_attribute(mut self, attribute: TemplateAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_list(mut self, list: TemplateList) -> Self {
        self.lists.push(list);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&TemplateAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn list(&self, name: &str) -> Option<&TemplateList> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// Look up an option value on this element.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|o| o.get(name))
    }

    /// Declarations marked `required`.
    pub fn required_attributes(&self) -> impl Iterator<Item = &TemplateAttribute> {
        self.attributes.iter().filter(|a| a.required)
    }
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(TemplateOption {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Value of the first option with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.value)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl TemplateAttribute {
    pub fn new(ty: AttributeType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            default_value: None,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, raw: impl Into<String>) -> Self {
        self.default_value = Some(raw.into());
        self
    }

    /// The default converted to a typed value.
    ///
    /// `None` if there is no default, or if a hand-built attribute carries
    /// text that does not fit its type.
    pub fn typed_default(&self) -> Option<Value> {
        self.default_value
            .as_deref()
            .and_then(|raw| self.ty.parse_literal(raw))
    }
}
