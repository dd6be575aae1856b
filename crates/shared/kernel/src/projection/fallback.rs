/// Resolves a user-facing string: the override when it carries text, the default otherwise.
///
/// Empty and whitespace-only overrides count as absent. Callers reach the override
/// with optional chaining (`ui.jobs.as_ref().and_then(|j| j.title.as_deref())`), so a
/// missing intermediate section is just another `None`.
pub fn resolve(value: Option<&str>, default: &str) -> String {
    resolve_chain([value], default)
}

/// Like [`resolve`], trying each candidate in order before falling back.
pub fn resolve_chain<'a, I>(candidates: I, default: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(default)
        .to_owned()
}
