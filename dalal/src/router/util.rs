use dalal_core::{Capability, DalalError};

/// Collapse a set of provider errors into a uniform `DalalError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - If exactly one error remains → that error.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    mut errors: Vec<DalalError>,
    not_found_what: Option<String>,
) -> DalalError {
    if !attempted_any {
        return DalalError::unsupported(capability.as_str());
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, DalalError::NotFound { .. }))
    {
        return DalalError::not_found(what);
    }
    if errors.len() == 1
        && let Some(only) = errors.pop()
    {
        return only;
    }
    DalalError::AllProvidersFailed(errors)
}

/// Keep the last `n` items of an oldest-first series.
pub fn tail<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    if items.len() > n {
        items.drain(..items.len() - n);
    }
    items
}

/// Push `err` into `warnings` if it is actionable, flattening aggregates.
pub fn append_actionable(warnings: &mut Vec<DalalError>, err: DalalError) {
    match err {
        DalalError::AllProvidersFailed(list) => {
            for inner in list {
                append_actionable(warnings, inner);
            }
        }
        DalalError::Unsupported { .. } | DalalError::NotFound { .. } => {}
        other => warnings.push(other),
    }
}
