//! Configuration validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. Author name and email present, email is a mailbox
//! 2. At least one filter
//! 3. Each filter, in order: criteria, action, address patterns

use super::address::{is_valid_mailbox, is_valid_pattern_list};
use super::error::ConfigError;
use super::model::{is_blank, Author, Filter, FiltersConfig};
use super::normalize::resolve;

/// Validate a decoded configuration
pub fn validate(config: &FiltersConfig) -> Result<(), ConfigError> {
    validate_author(&config.author)?;

    if config.filters.is_empty() {
        return Err(ConfigError::NoFilters);
    }

    for (index, filter) in config.filters.iter().enumerate() {
        let normalized = resolve(filter, &config.defaults);
        validate_filter(index, &normalized)?;
    }

    Ok(())
}

fn validate_author(author: &Author) -> Result<(), ConfigError> {
    if is_blank(&author.name) || is_blank(&author.email) {
        return Err(ConfigError::MissingAuthor);
    }
    if !is_valid_mailbox(&author.email) {
        return Err(ConfigError::InvalidAuthorEmail(author.email.clone()));
    }
    Ok(())
}

fn validate_filter(index: usize, filter: &Filter) -> Result<(), ConfigError> {
    if !filter.has_criteria() {
        return Err(ConfigError::MissingCriteria(index));
    }
    if !filter.has_action() {
        return Err(ConfigError::MissingAction(index));
    }

    let address_fields = [
        ("from", &filter.from),
        ("to", &filter.to),
        ("forwardTo", &filter.forward_to),
    ];
    for (field, value) in address_fields {
        if !is_blank(value) && !is_valid_pattern_list(value) {
            return Err(ConfigError::InvalidAddress {
                index,
                field,
                value: value.clone(),
            });
        }
    }

    Ok(())
}
