//! Feed, entry and property types

use crate::{APPS_NS, ATOM_NS, FILTER_TERM};

/// Author block of the feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Root feed element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Default namespace (`xmlns`)
    pub xmlns: String,

    /// Apps namespace (`xmlns:apps`)
    pub xmlns_apps: String,

    pub title: String,
    pub id: String,

    /// RFC 3339 timestamp
    pub updated: String,

    pub author: Author,

    /// Filter entries in configuration order
    pub entries: Vec<Entry>,
}

impl Feed {
    /// Create an empty feed with both namespaces declared
    pub fn new(title: impl Into<String>, id: impl Into<String>, updated: impl Into<String>, author: Author) -> Self {
        Self {
            xmlns: ATOM_NS.to_string(),
            xmlns_apps: APPS_NS.to_string(),
            title: title.into(),
            id: id.into(),
            updated: updated.into(),
            author,
            entries: Vec::new(),
        }
    }
}

/// Entry category (`<category term="..."/>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub term: String,
}

impl Category {
    pub fn filter() -> Self {
        Self {
            term: FILTER_TERM.to_string(),
        }
    }
}

/// A single filter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub category: Category,
    pub title: String,
    pub id: String,
    pub updated: String,

    /// Optional body; omitted from the output when `None` or empty
    pub content: Option<String>,

    /// `apps:property` elements in insertion order
    pub properties: Vec<Property>,
}

impl Entry {
    /// Create a filter entry with no properties
    pub fn filter(title: impl Into<String>, id: impl Into<String>, updated: impl Into<String>) -> Self {
        Self {
            category: Category::filter(),
            title: title.into(),
            id: id.into(),
            updated: updated.into(),
            content: None,
            properties: Vec::new(),
        }
    }

    /// Append a property, keeping insertion order
    pub fn push_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push(Property::new(name, value));
    }

    /// Look up the first property with the given name
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Name/value pair rendered as `<apps:property name=".." value=".."/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
