//! XML encoding of the feed
//!
//! Output layout:
//! - fixed declaration header on its own line
//! - two-space indentation per nesting level
//! - explicit close tags for empty elements (`<category term="filter"></category>`)

use crate::document::{Entry, Feed};

/// XML declaration written before the root element
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const INDENT: &str = "  ";

impl Feed {
    /// Encode the feed as a complete XML document, header included
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(XML_HEADER);

        xml.push_str(&format!(
            "<feed xmlns=\"{}\" xmlns:apps=\"{}\">\n",
            xml_escape(&self.xmlns),
            xml_escape(&self.xmlns_apps)
        ));
        push_text_element(&mut xml, 1, "title", &self.title);
        push_text_element(&mut xml, 1, "id", &self.id);
        push_text_element(&mut xml, 1, "updated", &self.updated);

        push_indent(&mut xml, 1);
        xml.push_str("<author>\n");
        push_text_element(&mut xml, 2, "name", &self.author.name);
        push_text_element(&mut xml, 2, "email", &self.author.email);
        push_indent(&mut xml, 1);
        xml.push_str("</author>\n");

        for entry in &self.entries {
            push_entry(&mut xml, entry);
        }

        xml.push_str("</feed>");
        xml
    }
}

fn push_entry(xml: &mut String, entry: &Entry) {
    push_indent(xml, 1);
    xml.push_str("<entry>\n");

    push_indent(xml, 2);
    xml.push_str(&format!(
        "<category term=\"{}\"></category>\n",
        xml_escape(&entry.category.term)
    ));
    push_text_element(xml, 2, "title", &entry.title);
    push_text_element(xml, 2, "id", &entry.id);
    push_text_element(xml, 2, "updated", &entry.updated);

    if let Some(content) = entry.content.as_deref().filter(|c| !c.is_empty()) {
        push_text_element(xml, 2, "content", content);
    }

    for property in &entry.properties {
        push_indent(xml, 2);
        xml.push_str(&format!(
            "<apps:property name=\"{}\" value=\"{}\"></apps:property>\n",
            xml_escape(&property.name),
            xml_escape(&property.value)
        ));
    }

    push_indent(xml, 1);
    xml.push_str("</entry>\n");
}

fn push_text_element(xml: &mut String, depth: usize, name: &str, text: &str) {
    push_indent(xml, depth);
    xml.push_str(&format!("<{name}>{}</{name}>\n", xml_escape(text)));
}

fn push_indent(xml: &mut String, depth: usize) {
    for _ in 0..depth {
        xml.push_str(INDENT);
    }
}

/// XML-escape a string for use in text content or a quoted attribute.
///
/// Whitespace control characters are written as character references so
/// attribute values survive attribute-value normalization on re-read.
/// Characters XML 1.0 does not allow at all become U+FFFD.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}

/// XML 1.0 `Char` production; surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Author;

    fn sample_feed() -> Feed {
        let author = Author {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };
        let mut feed = Feed::new(
            "Mail Filters",
            "tag:mail.google.com,2008:filters:1",
            "2023-01-01T12:00:00Z",
            author,
        );
        let mut entry = Entry::filter(
            "Mail Filter",
            "tag:mail.google.com,2008:filter:z0000000000000001",
            "2023-01-01T12:00:00Z",
        );
        entry.push_property("from", "example@test.com");
        entry.push_property("label", "Test");
        feed.entries.push(entry);
        feed
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("hello"), "hello");
        assert_eq!(xml_escape("<test>"), "&lt;test&gt;");
        assert_eq!(xml_escape("foo & bar"), "foo &amp; bar");
        assert_eq!(xml_escape("\"quoted\" 'single'"), "&quot;quoted&quot; &apos;single&apos;");
        assert_eq!(xml_escape("a\nb"), "a&#xA;b");
    }

    #[test]
    fn test_xml_escape_replaces_forbidden_chars() {
        assert_eq!(xml_escape("a\u{1}b"), "a\u{FFFD}b");
        assert_eq!(xml_escape("\u{0}\u{B}\u{C}\u{1F}"), "\u{FFFD}".repeat(4));
        assert_eq!(xml_escape("x\u{FFFE}\u{FFFF}"), "x\u{FFFD}\u{FFFD}");
        assert_eq!(xml_escape("\u{FFFD} \u{1F600}"), "\u{FFFD} \u{1F600}");
    }

    #[test]
    fn test_header_and_root() {
        let xml = sample_feed().to_xml();
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains(
            "<feed xmlns=\"http://www.w3.org/2005/Atom\" xmlns:apps=\"http://schemas.google.com/apps/2006\">\n"
        ));
        assert!(xml.ends_with("</feed>"));
    }

    #[test]
    fn test_exact_layout() {
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<feed xmlns=\"http://www.w3.org/2005/Atom\" xmlns:apps=\"http://schemas.google.com/apps/2006\">\n",
            "  <title>Mail Filters</title>\n",
            "  <id>tag:mail.google.com,2008:filters:1</id>\n",
            "  <updated>2023-01-01T12:00:00Z</updated>\n",
            "  <author>\n",
            "    <name>Test User</name>\n",
            "    <email>test@example.com</email>\n",
            "  </author>\n",
            "  <entry>\n",
            "    <category term=\"filter\"></category>\n",
            "    <title>Mail Filter</title>\n",
            "    <id>tag:mail.google.com,2008:filter:z0000000000000001</id>\n",
            "    <updated>2023-01-01T12:00:00Z</updated>\n",
            "    <apps:property name=\"from\" value=\"example@test.com\"></apps:property>\n",
            "    <apps:property name=\"label\" value=\"Test\"></apps:property>\n",
            "  </entry>\n",
            "</feed>",
        );
        assert_eq!(sample_feed().to_xml(), expected);
    }

    #[test]
    fn test_content_only_when_present() {
        let mut feed = sample_feed();
        assert!(!feed.to_xml().contains("<content>"));

        feed.entries[0].content = Some(String::new());
        assert!(!feed.to_xml().contains("<content>"));

        feed.entries[0].content = Some("notes & more".to_string());
        assert!(feed.to_xml().contains("    <content>notes &amp; more</content>\n"));
    }

    #[test]
    fn test_property_values_escaped() {
        let mut feed = sample_feed();
        feed.entries[0].push_property("hasTheWord", "\"urgent\" <now>");
        let xml = feed.to_xml();
        assert!(xml.contains(
            "<apps:property name=\"hasTheWord\" value=\"&quot;urgent&quot; &lt;now&gt;\"></apps:property>"
        ));
    }
}
