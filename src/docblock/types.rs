//! Type-string classification and normalisation for PHPDoc types.
//!
//! A type string may carry several candidate types.  On input they may be
//! separated by `|` (PHPDoc union syntax) or `/`; on output they are
//! always joined with [`TYPE_SEPARATOR`].

use crate::util::sanitize_class_name;

/// Native type names that never refer to a class.
pub const NATIVE_TYPES: &[&str] = &[
    "mixed", "string", "int", "float", "integer", "number", "bool", "boolean", "object", "false",
    "true", "null", "array", "void", "callable",
];

/// Separator placed between alternative candidate types.
pub const TYPE_SEPARATOR: &str = "/";

/// Check whether `type_name` is one of the [`NATIVE_TYPES`].
///
/// Case-insensitive; surrounding whitespace and `\` are ignored.
pub fn is_native_type(type_name: &str) -> bool {
    let lower = type_name
        .trim()
        .trim_matches('\\')
        .to_ascii_lowercase();
    NATIVE_TYPES.contains(&lower.as_str())
}

/// Check whether a single type token refers to a class.
///
/// A trailing `[]` is ignored, so `Foo[]` is a class reference while
/// `int[]` is not.  Tokens containing whitespace (free text that leaked
/// into a type position) and variables such as `$this` never are.
pub fn is_class_reference(type_name: &str) -> bool {
    let trimmed = type_name.trim();
    if trimmed.is_empty() || trimmed.starts_with('$') || trimmed.contains(char::is_whitespace) {
        return false;
    }
    let lower = trimmed.to_ascii_lowercase();
    let base = lower.trim_start_matches('\\').trim_end_matches(['[', ']']);
    !base.is_empty() && !NATIVE_TYPES.contains(&base)
}

/// Iterate over the candidate types of a type string, accepting both `|`
/// and `/` as separators.  Empty candidates are skipped.
pub fn split_candidates(type_decl: &str) -> impl Iterator<Item = &str> {
    type_decl
        .split(['|', '/'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

/// Join candidate types with [`TYPE_SEPARATOR`], dropping repeats.
///
/// The first occurrence of each candidate wins, so the order in which the
/// candidates were supplied is kept.
pub fn join_candidates<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: Vec<String> = Vec::new();
    for candidate in candidates {
        for part in split_candidates(candidate.as_ref()) {
            if !parts.iter().any(|p| p == part) {
                parts.push(part.to_string());
            }
        }
    }
    parts.join(TYPE_SEPARATOR)
}

/// Qualify a single type token against `namespace`.
///
///   - native types are returned unchanged;
///   - absolute names (`\Foo\Bar`) are normalised;
///   - bare names (`Bar`, `Sub\Bar`) are prefixed with the namespace.
pub fn qualify_type(type_name: &str, namespace: &str) -> String {
    let type_name = type_name.trim();
    if !is_class_reference(type_name) {
        return type_name.to_string();
    }
    let namespace = namespace.trim_matches('\\');
    if type_name.starts_with('\\') || namespace.is_empty() {
        sanitize_class_name(type_name)
    } else {
        sanitize_class_name(&format!("{}\\{}", namespace, type_name))
    }
}

/// Normalise a full type declaration: qualify every candidate against
/// `namespace`, expand nullable `?Foo` into `Foo` + `null`, drop repeats
/// and join with [`TYPE_SEPARATOR`].
pub fn sanitize_declaration(type_decl: &str, namespace: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for candidate in split_candidates(type_decl) {
        match candidate.strip_prefix('?') {
            Some(inner) => {
                parts.push(qualify_type(inner, namespace));
                parts.push("null".to_string());
            }
            None => parts.push(qualify_type(candidate, namespace)),
        }
    }
    join_candidates(parts)
}
