//! PHPDoc tag interpretation.
//!
//! Parsing happens in two phases.  The tokenizer's segments are first
//! grouped generically by tag name; the known tags (`@param`, `@see`,
//! `@return`, `@deprecated`, `@example`, `@inheritDoc`, `@ignore`,
//! `@internal`) are then promoted to the typed fields of [`DocInfo`] and
//! everything else is kept verbatim as tag name → values.
//!
//! Nothing in here fails: malformed tags simply contribute nothing.

use std::collections::BTreeMap;

use tracing::debug;

use super::info::{DocInfo, ParamDoc};
use super::tokenizer::{self, DESCRIPTION, EXAMPLE, Segment};
use super::types::sanitize_declaration;

/// Inline spellings of the inherit-doc request.
const INLINE_INHERIT_DOC: &[&str] = &["{@inheritDoc}", "{@inheritdoc}"];

// ─── Public API ─────────────────────────────────────────────────────────────

/// Parse a raw `/** ... */` comment into a [`DocInfo`].
///
/// `namespace` is the namespace of the class the comment belongs to; bare
/// class names in `@param` types are qualified against it.
pub fn parse_doc_info(comment: &str, namespace: &str) -> DocInfo {
    let cleaned = tokenizer::clean_comment(comment);
    let segments = tokenizer::tokenize(&cleaned);
    let tags = group_segments(&segments);
    let inline_inherit = INLINE_INHERIT_DOC.iter().any(|m| cleaned.contains(m));
    specialize(&tags, namespace, inline_inherit)
}

/// Parse the head of a `@param` tag.
///
/// Accepts both `@param $name description` (type defaults to `mixed`) and
/// `@param Type $name description`.  The name is cut at the first `=` and
/// loses its `$`, `&` and `...` prefixes.
pub fn parse_param(segment: &Segment<'_>, namespace: &str) -> Option<ParamDoc> {
    let (type_name, raw_name, rest) = match segment.head.as_slice() {
        [name, rest @ ..] if name.starts_with('$') => ("mixed", *name, rest),
        [type_name, name, rest @ ..] => (*type_name, *name, rest),
        _ => return None,
    };

    let name = raw_name
        .split('=')
        .next()
        .unwrap_or_default()
        .trim_start_matches(['&', '.', '$']);
    if name.is_empty() {
        return None;
    }

    let mut description = rest.join(" ");
    for line in &segment.lines {
        description.push(' ');
        description.push_str(line);
    }

    Some(ParamDoc {
        name: name.to_string(),
        type_name: sanitize_declaration(type_name, namespace),
        description: description.trim().to_string(),
    })
}

/// Parse a `@see` tag.
///
///   - `@see https://example.com`        → `<https://example.com>`
///   - `@see https://example.com A label` → `[A label](https://example.com)`
///   - `@see Other::method()`            → `Other::method()`
///
/// Returns `None` for an empty tag.
pub fn parse_see(segment: &Segment<'_>) -> Option<String> {
    let words = segment.words();
    let (first, rest) = words.split_first()?;

    if first.starts_with("http://") || first.starts_with("https://") {
        if rest.is_empty() {
            Some(format!("<{}>", first))
        } else {
            Some(format!("[{}]({})", rest.join(" "), first))
        }
    } else {
        Some(words.join(" "))
    }
}

// ─── Internals ──────────────────────────────────────────────────────────────

fn group_segments<'s, 'a>(
    segments: &'s [Segment<'a>],
) -> BTreeMap<&'a str, Vec<&'s Segment<'a>>> {
    let mut tags: BTreeMap<&'a str, Vec<&'s Segment<'a>>> = BTreeMap::new();
    for segment in segments {
        if segment.tag.is_empty() {
            continue;
        }
        tags.entry(segment.tag).or_default().push(segment);
    }
    tags
}

fn specialize(
    tags: &BTreeMap<&str, Vec<&Segment<'_>>>,
    namespace: &str,
    inline_inherit: bool,
) -> DocInfo {
    let mut info = DocInfo::default();

    for (&tag, segments) in tags {
        match tag {
            DESCRIPTION => info.description = join_texts(segments, " "),
            EXAMPLE => info.example = join_texts(segments, "\n"),
            "param" => info.set_params(
                segments
                    .iter()
                    .filter_map(|s| parse_param(s, namespace))
                    .collect(),
            ),
            "see" => info.see = segments.iter().filter_map(|s| parse_see(s)).collect(),
            "return" => {
                if let Some((type_name, description)) = segments.iter().find_map(|s| parse_return(s))
                {
                    info.return_type = type_name;
                    info.return_description = description;
                }
            }
            "deprecated" => info.deprecated = Some(join_texts(segments, " ")),
            "inheritDoc" | "inheritdoc" => info.inherit_doc = true,
            "ignore" => info.ignore = true,
            "internal" => info.internal = true,
            other => {
                info.other_tags.insert(
                    other.to_string(),
                    segments.iter().map(|s| s.text()).collect(),
                );
            }
        }
    }

    // The inline form may sit in any tag body; only the description is
    // rewritten.
    if inline_inherit {
        info.inherit_doc = true;
    }
    for marker in INLINE_INHERIT_DOC {
        if info.description.contains(marker) {
            info.description = info.description.replace(marker, "").trim().to_string();
        }
    }

    // Inherited documentation replaces the method's own signature docs.
    if info.inherit_doc && (!info.params.is_empty() || !info.return_type.is_empty()) {
        debug!("dropping @param/@return tags next to an inherit-doc request");
        info.params.clear();
        info.return_type.clear();
        info.return_description.clear();
    }

    info
}

fn parse_return(segment: &Segment<'_>) -> Option<(String, String)> {
    let words = segment.words();
    let (type_name, rest) = words.split_first()?;
    Some((type_name.to_string(), rest.join(" ")))
}

fn join_texts(segments: &[&Segment<'_>], separator: &str) -> String {
    segments
        .iter()
        .map(|s| s.text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
