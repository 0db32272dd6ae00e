//! GRC - mail filter rules to Atom filter feed
//!
//! Converts a YAML description of mail filters into the Atom XML feed a mail
//! provider accepts for bulk filter import.

pub mod cancel;
pub mod config;
pub mod feed;
pub mod output;
pub mod pipeline;

pub use cancel::CancelFlag;
pub use config::{Author, ConfigError, Defaults, Filter, FiltersConfig};
pub use grc_atom::{Entry, Feed, Property};
pub use output::WriteError;
pub use pipeline::{generate, generate_at, GenerateOptions, PipelineError, PipelineResult};
