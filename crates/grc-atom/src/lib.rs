//! Atom filter feed document
//!
//! Models the Atom feed a mail provider accepts for bulk filter import and
//! encodes it as XML.

pub mod document;
pub mod render;

pub use document::{Author, Category, Entry, Feed, Property};
pub use render::{xml_escape, XML_HEADER};

/// Atom namespace, declared as the default namespace of the root `feed`.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Apps namespace, bound to the `apps` prefix for filter properties.
pub const APPS_NS: &str = "http://schemas.google.com/apps/2006";

/// Category term carried by every filter entry.
pub const FILTER_TERM: &str = "filter";
