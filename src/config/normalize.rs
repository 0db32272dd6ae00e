//! Default resolution for tri-state fields

use super::model::{Defaults, Filter};

/// Resolve a filter's unset tri-state fields against `defaults`.
///
/// An unset field becomes `Some(true)` when its default is `true`; a `false`
/// default leaves it unset so no property is emitted for it. Explicit values,
/// `false` included, are never overridden.
pub fn resolve(filter: &Filter, defaults: &Defaults) -> Filter {
    let mut resolved = filter.clone();

    apply_default(&mut resolved.should_archive, defaults.should_archive);
    apply_default(&mut resolved.should_mark_as_read, defaults.should_mark_as_read);
    apply_default(&mut resolved.should_star, defaults.should_star);
    apply_default(&mut resolved.should_never_spam, defaults.should_never_spam);
    apply_default(
        &mut resolved.should_always_mark_as_important,
        defaults.should_always_mark_as_important,
    );
    apply_default(
        &mut resolved.should_never_mark_as_important,
        defaults.should_never_mark_as_important,
    );
    apply_default(&mut resolved.should_trash, defaults.should_trash);
    apply_default(&mut resolved.has_attachment, defaults.has_attachment);

    resolved
}

fn apply_default(target: &mut Option<bool>, default: bool) {
    if target.is_none() && default {
        *target = Some(true);
    }
}
