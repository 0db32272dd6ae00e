//! Address and domain pattern checks
//!
//! Address-bearing filter fields (`from`, `to`, `forwardTo`) hold search
//! expressions: alternatives joined with `OR`, comma or space separated
//! lists, and `{...}` / `(...)` groups. Only tokens containing `@` are
//! checked, and only for structural breakage: more than one `@`, an empty
//! domain, or a missing local part where one is required. Everything else is
//! free text and accepted as written.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Grouping characters, commas and whitespace between pattern tokens
const TOKEN_SEPARATORS: &str = r"[\s,{}()]+";

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_SEPARATORS).expect("token separator pattern is valid"))
}

/// `local@domain` with exactly one `@`, both sides non-empty, no whitespace.
pub fn is_valid_mailbox(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && is_valid_domain(domain),
        None => false,
    }
}

/// A single pattern token: free text, a bare domain, `@domain`,
/// `user@domain` or `*@domain`.
pub fn is_valid_pattern(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    match token.split_once('@') {
        // `@domain` and `*@domain` match a whole domain; any other local part
        // is taken as written.
        Some((_, domain)) => is_valid_domain(domain),
        None => true,
    }
}

/// Every token of the search expression in `value` is a valid pattern.
///
/// An expression made only of separators has no tokens and is rejected.
pub fn is_valid_pattern_list(value: &str) -> bool {
    let mut tokens = pattern_tokens(value).peekable();
    tokens.peek().is_some() && tokens.all(is_valid_pattern)
}

/// Split a search expression into its address tokens
pub fn pattern_tokens(value: &str) -> impl Iterator<Item = &str> {
    separator_re()
        .split(value)
        .filter(|token| !token.is_empty())
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && !domain.contains('@')
}
