//! Config document tree.
//!
//! ```text
//! ConfigName example            -> ConfigRoot { name: "example", .. }
//! Import "shared"               -> ConfigRoot::imports
//! ConfigElement Server          -> ConfigElement { name: "Server", .. }
//!     port = 8080               -> ConfigAttribute
//!     ConfigList Routes         -> ConfigList { name: "Routes", .. }
//!         ConfigListElement 0   -> ConfigListElement { id: 0, element }
//!             ConfigElement Route
//!             endConfigElement
//!         endConfigListElement
//!     endConfigList
//! endConfigElement
//! ```

use crate::Value;

/// Root of a config document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct ConfigRoot {
    /// Name given after `ConfigName`.
    pub name: String,
    /// `Import` paths, in source order. Never resolved.
    pub imports: Vec<String>,
    /// Top-level elements, in source order.
    pub elements: Vec<ConfigElement>,
    /// Top-level lists, in source order.
    pub lists: Vec<ConfigList>,
}

/// A named, ordered collection of id-tagged elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct ConfigList {
    /// Declared list name, matched against a template list of the same name.
    pub name: String,
    pub elements: Vec<ConfigListElement>,
}

/// One entry of a [`ConfigList`]: an id label and exactly one element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct ConfigListElement {
    /// Caller-assigned label. Not an index; need not be unique or contiguous.
    pub id: i64,
    pub element: ConfigElement,
}

/// A named node with attributes and nested lists.
///
/// Attributes and lists may be interleaved in the source, but each kind is
/// kept in its own sequence, so only the order within a kind is preserved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct ConfigElement {
    /// Declared element name, matched against a template element of the same name.
    pub name: String,
    pub attributes: Vec<ConfigAttribute>,
    pub lists: Vec<ConfigList>,
}

/// `name = value`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct ConfigAttribute {
    pub name: String,
    pub value: Value,
}

impl ConfigRoot {
    /// Create an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            elements: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    pub fn with_element(mut self, element: ConfigElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_list(mut self, list: ConfigList) -> Self {
        self.lists.push(list);
        self
    }

    /// First top-level element with the given name.
    pub fn element(&self, name: &str) -> Option<&ConfigElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// All top-level elements with the given name.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigElement> {
        self.elements.iter().filter(move |e| e.name == name)
    }

    /// First top-level list with the given name.
    pub fn list(&self, name: &str) -> Option<&ConfigList> {
        self.lists.iter().find(|l| l.name == name)
    }
}

impl ConfigList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, id: i64, element: ConfigElement) -> Self {
        self.elements.push(ConfigListElement { id, element });
        self
    }

    /// Element labelled with `id`, if any. The first one wins on duplicates.
    pub fn get(&self, id: i64) -> Option<&ConfigElement> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ConfigElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push(ConfigAttribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_list(mut self, list: ConfigList) -> Self {
        self.lists.push(list);
        self
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// First nested list with the given name.
    pub fn list(&self, name: &str) -> Option<&ConfigList> {
        self.lists.iter().find(|l| l.name == name)
    }
}

impl ConfigAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
