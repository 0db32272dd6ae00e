//! Shared helpers for integration tests
//!
//! YAML fixtures live next to this module; tests copy them into a temp dir so
//! generated output never lands in the source tree.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Path to a fixture file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Copy a fixture into `dir`, returning the copy's path
pub fn copy_fixture(dir: &TempDir, name: &str) -> PathBuf {
    let target = dir.path().join(name);
    fs::copy(fixture_path(name), &target).unwrap();
    target
}

/// Write `contents` to `dir/name`, returning the path
pub fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let target = dir.path().join(name);
    fs::write(&target, contents).unwrap();
    target
}

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const APPS_NS: &str = "http://schemas.google.com/apps/2006";

/// A parsed `<entry>` from generated XML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub id: String,
    pub updated: String,
    pub properties: Vec<(String, String)>,
}

/// Parse generated feed XML and extract its entries.
///
/// Panics if the document is not well-formed or the root is not an Atom
/// `feed`.
pub fn parse_entries(xml: &str) -> Vec<ParsedEntry> {
    let doc = roxmltree::Document::parse(xml).unwrap();
    let feed = doc.root_element();
    assert!(feed.has_tag_name((ATOM_NS, "feed")), "root is {:?}", feed.tag_name());

    feed.children()
        .filter(|n| n.has_tag_name((ATOM_NS, "entry")))
        .map(|entry| ParsedEntry {
            id: child_text(entry, "id"),
            updated: child_text(entry, "updated"),
            properties: entry
                .children()
                .filter(|n| n.has_tag_name((APPS_NS, "property")))
                .map(|p| {
                    (
                        p.attribute("name").unwrap().to_string(),
                        p.attribute("value").unwrap().to_string(),
                    )
                })
                .collect(),
        })
        .collect()
}

/// Text of the feed-level Atom element `name`, e.g. `title` or `id`
pub fn feed_text(xml: &str, name: &str) -> String {
    let doc = roxmltree::Document::parse(xml).unwrap();
    child_text(doc.root_element(), name)
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> String {
    node.children()
        .find(|n| n.has_tag_name((ATOM_NS, name)))
        .and_then(|n| n.text())
        .unwrap_or_default()
        .to_string()
}
