//! Feed construction
//!
//! Maps a validated configuration onto the Atom filter feed. Building is a
//! pure function of the configuration and the caller's timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use grc_atom::{Entry, Feed, Property};

use crate::config::{resolve, Filter, FiltersConfig};

/// Feed title
pub const FEED_TITLE: &str = "Mail Filters";

/// Title of every filter entry
pub const ENTRY_TITLE: &str = "Mail Filter";

const FEED_ID_PREFIX: &str = "tag:mail.google.com,2008:filters:";
const ENTRY_ID_PREFIX: &str = "tag:mail.google.com,2008:filter:z";

type Accessor = fn(&Filter) -> Option<String>;

/// Entry properties in emission order: criteria, boolean actions, text actions.
pub const PROPERTY_FIELDS: &[(&str, Accessor)] = &[
    ("from", |f| text(&f.from)),
    ("to", |f| text(&f.to)),
    ("subject", |f| text(&f.subject)),
    ("hasTheWord", |f| text(&f.has_the_word)),
    ("doesNotHaveTheWord", |f| text(&f.does_not_have_the_word)),
    ("list", |f| text(&f.list)),
    ("query", |f| text(&f.query)),
    ("hasAttachment", |f| flag(f.has_attachment)),
    ("shouldArchive", |f| flag(f.should_archive)),
    ("shouldMarkAsRead", |f| flag(f.should_mark_as_read)),
    ("shouldStar", |f| flag(f.should_star)),
    ("shouldNeverSpam", |f| flag(f.should_never_spam)),
    ("shouldAlwaysMarkAsImportant", |f| flag(f.should_always_mark_as_important)),
    ("shouldNeverMarkAsImportant", |f| flag(f.should_never_mark_as_important)),
    ("shouldTrash", |f| flag(f.should_trash)),
    ("label", |f| text(&f.label)),
    ("smartLabelToApply", |f| text(&f.smart_label)),
    ("forwardTo", |f| text(&f.forward_to)),
];

fn text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn flag(value: Option<bool>) -> Option<String> {
    value.map(|v| bool_token(v).to_string())
}

/// Wire token for a boolean property value
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Build the feed for `config`, stamping every element with `now`.
///
/// Assumes `config` has already passed validation.
pub fn build(config: &FiltersConfig, now: DateTime<Utc>) -> Feed {
    let updated = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let author = grc_atom::Author {
        name: config.author.name.clone(),
        email: config.author.email.clone(),
    };

    let mut feed = Feed::new(FEED_TITLE, feed_id(now), updated.as_str(), author);
    feed.entries = config
        .filters
        .iter()
        .enumerate()
        .map(|(index, filter)| {
            let normalized = resolve(filter, &config.defaults);
            let mut entry = Entry::filter(ENTRY_TITLE, entry_id(index), updated.as_str());
            entry.properties = filter_properties(&normalized);
            entry
        })
        .collect();

    feed
}

/// Feed ID embedding the nanosecond Unix timestamp of `now`
pub fn feed_id(now: DateTime<Utc>) -> String {
    let nanos = i128::from(now.timestamp()) * 1_000_000_000 + i128::from(now.timestamp_subsec_nanos());
    format!("{}{}", FEED_ID_PREFIX, nanos)
}

/// Entry ID for the filter at 0-based `index`; numbering starts at 1.
pub fn entry_id(index: usize) -> String {
    format!("{}{:016}", ENTRY_ID_PREFIX, index + 1)
}

/// Properties for an already-normalized filter
pub fn filter_properties(filter: &Filter) -> Vec<Property> {
    PROPERTY_FIELDS
        .iter()
        .filter_map(|(name, accessor)| accessor(filter).map(|value| Property::new(*name, value)))
        .collect()
}
