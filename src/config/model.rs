//! Filter rules configuration as read from YAML
//!
//! Every struct rejects unknown keys. Tri-state booleans are `Option<bool>`:
//! `None` means "not written in the file" and defers to [`Defaults`].
//! A null string field (`label: ~`) reads as unset, the same as omitting it.

use serde::{Deserialize, Deserializer};

/// Author block copied into the generated feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Fallback values for unset tri-state fields (YAML key `default`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Defaults {
    pub should_archive: bool,
    pub should_mark_as_read: bool,
    pub should_star: bool,
    pub should_never_spam: bool,
    pub should_always_mark_as_important: bool,
    pub should_never_mark_as_important: bool,
    pub should_trash: bool,
    pub has_attachment: bool,
}

/// A single filter rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Filter {
    // Criteria
    #[serde(deserialize_with = "null_as_empty")]
    pub from: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub to: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub has_the_word: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub does_not_have_the_word: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub list: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    pub has_attachment: Option<bool>,

    // Actions
    #[serde(deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub smart_label: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub forward_to: String,
    pub should_archive: Option<bool>,
    pub should_mark_as_read: Option<bool>,
    pub should_star: Option<bool>,
    pub should_never_spam: Option<bool>,
    pub should_always_mark_as_important: Option<bool>,
    pub should_never_mark_as_important: Option<bool>,
    pub should_trash: Option<bool>,
}

impl Filter {
    /// String criteria in emission order
    pub fn text_criteria(&self) -> [&str; 7] {
        [
            &self.from,
            &self.to,
            &self.subject,
            &self.has_the_word,
            &self.does_not_have_the_word,
            &self.list,
            &self.query,
        ]
    }

    /// String actions in emission order
    pub fn text_actions(&self) -> [&str; 3] {
        [&self.label, &self.smart_label, &self.forward_to]
    }

    /// Tri-state boolean actions in emission order
    pub fn flag_actions(&self) -> [Option<bool>; 7] {
        [
            self.should_archive,
            self.should_mark_as_read,
            self.should_star,
            self.should_never_spam,
            self.should_always_mark_as_important,
            self.should_never_mark_as_important,
            self.should_trash,
        ]
    }

    /// At least one criterion selects messages.
    ///
    /// `hasAttachment: false` alone is not a criterion.
    pub fn has_criteria(&self) -> bool {
        self.text_criteria().iter().any(|v| !is_blank(v)) || self.has_attachment == Some(true)
    }

    /// At least one action applies to matched messages.
    ///
    /// Any set boolean action counts, including an explicit `false`.
    pub fn has_action(&self) -> bool {
        self.text_actions().iter().any(|v| !is_blank(v))
            || self.flag_actions().iter().any(Option::is_some)
    }
}

/// Complete configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiltersConfig {
    #[serde(default)]
    pub author: Author,

    #[serde(default, rename = "default")]
    pub defaults: Defaults,

    /// Order determines entry order and entry IDs in the feed
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// Null decodes to the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty or whitespace-only
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
