//! Filter rules configuration
//!
//! Load path: suffix check → read → strict YAML decode → validation.
//! Validation and feed building both see filters through [`resolve`], which
//! fills unset tri-state fields from the `default` block.

mod address;
mod error;
mod loader;
mod model;
mod normalize;
mod validate;

pub use address::{is_valid_mailbox, is_valid_pattern, is_valid_pattern_list, pattern_tokens};
pub use error::ConfigError;
pub use loader::{load, parse};
pub use model::{Author, Defaults, Filter, FiltersConfig};
pub use normalize::resolve;
pub use validate::validate;
