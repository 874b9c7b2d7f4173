//! Name helpers shared by the docblock parser, the type reconciler and the
//! entity model.
//!
//! Class names travel through the crate in two shapes:
//!   - the *display* form, always with exactly one leading `\`
//!     (e.g. `"\\Acme\\ExampleClass"`), produced by [`sanitize_class_name`];
//!   - the *lookup key*, lowercased with no leading `\`
//!     (e.g. `"acme\\exampleclass"`), produced by [`class_key`] and used by
//!     loaders and caches.

/// Return the last segment of a namespace-qualified name.
///
///   - `"Foo\\Bar\\Baz"` → `"Baz"`
///   - `"\\Baz"`         → `"Baz"`
///   - `"Baz"`           → `"Baz"`
pub fn short_name(name: &str) -> &str {
    let trimmed = name.trim().trim_end_matches('\\');
    trimmed.rsplit('\\').next().unwrap_or(trimmed)
}

/// Normalise a class name to its display form: one leading `\`, no
/// trailing `\`, no surrounding whitespace.
pub fn sanitize_class_name(name: &str) -> String {
    format!(
        "\\{}",
        name.trim_matches(|c: char| c == '\\' || c.is_whitespace())
    )
}

/// Normalise a class name to its lookup key: no leading or trailing `\`,
/// lowercased, since PHP class names are case-insensitive.
pub fn class_key(name: &str) -> String {
    name.trim_matches(|c: char| c == '\\' || c.is_whitespace())
        .to_ascii_lowercase()
}

/// The namespace part of a class name, without leading or trailing `\`.
///
/// `"\\Acme\\Sub\\Thing"` → `"Acme\\Sub"`, `"Thing"` → `""`.
pub fn namespace_of(name: &str) -> &str {
    let name = name.trim().trim_matches('\\');
    match name.rfind('\\') {
        Some(idx) => &name[..idx],
        None => "",
    }
}
