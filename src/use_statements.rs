/// `use` statement extraction.
///
/// PHP source is never parsed; the imports of a file are recovered with a
/// plain text scan.  Each statement starts at the `use` keyword (not part
/// of a longer word, followed by whitespace) and ends at the next `;`.
/// Grouped imports (`use Foo\{Bar, Baz as Qux};`) and aliases are
/// understood; `use function` and `use const` imports are skipped.
///
/// The result maps the names a file can refer to a class by onto the
/// fully-qualified class they import, which is what alias resolution in
/// [`reconcile`](crate::reconcile) needs.
use memchr::memmem;

use crate::util::{sanitize_class_name, short_name};

/// One imported class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseStatement {
    /// Fully-qualified class name, with a leading `\`.
    pub path: String,
    /// The `as` alias, if any.
    pub alias: Option<String>,
}

impl UseStatement {
    /// The name the importing file uses for the class: the alias when
    /// present, otherwise the last segment of the path.
    pub fn imported_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => short_name(&self.path),
        }
    }
}

/// Extract every class import from a chunk of PHP source.
///
/// Statements are returned in source order; repeated imports are kept.
pub fn parse_use_statements(content: &str) -> Vec<UseStatement> {
    let bytes = content.as_bytes();
    let starts: Vec<usize> = memmem::find_iter(bytes, b"use")
        .filter(|&pos| is_use_keyword(bytes, pos))
        .collect();

    let mut statements = Vec::new();
    for (idx, &start) in starts.iter().enumerate() {
        let body_start = start + 3;
        let body_end = starts.get(idx + 1).copied().unwrap_or(bytes.len());
        let chunk = &content[body_start..body_end];
        let statement = chunk.split(';').next().unwrap_or_default().trim();
        if statement.is_empty() {
            continue;
        }
        parse_statement(statement, &mut statements);
    }
    statements
}

/// Look up the fully-qualified class a file imports under `name`.
///
/// Matching is case-insensitive, as PHP class names are.
pub fn find_import<'a>(statements: &'a [UseStatement], name: &str) -> Option<&'a UseStatement> {
    let name = name.trim_start_matches('\\');
    statements
        .iter()
        .find(|s| s.imported_name().eq_ignore_ascii_case(name))
}

// ─── Internals ──────────────────────────────────────────────────────────────

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte == b'\\'
}

/// `use` must stand alone: no identifier character before it and
/// whitespace right after it.
fn is_use_keyword(bytes: &[u8], pos: usize) -> bool {
    if pos > 0 && is_identifier_byte(bytes[pos - 1]) {
        return false;
    }
    bytes
        .get(pos + 3)
        .is_some_and(|&next| next.is_ascii_whitespace())
}

fn parse_statement(statement: &str, out: &mut Vec<UseStatement>) {
    let first_word = statement.split_whitespace().next().unwrap_or_default();
    if first_word.eq_ignore_ascii_case("function") || first_word.eq_ignore_ascii_case("const") {
        return;
    }

    // `use Prefix\{A, B as C};`
    if let Some(open) = statement.find('{') {
        let prefix = statement[..open].trim().trim_end_matches('\\');
        let close = statement.rfind('}').unwrap_or(statement.len());
        if close <= open {
            return;
        }
        for item in statement[open + 1..close].split(',') {
            let item = item.trim();
            let item_word = item.split_whitespace().next().unwrap_or_default();
            if item_word.eq_ignore_ascii_case("function") || item_word.eq_ignore_ascii_case("const")
            {
                continue;
            }
            if let Some(mut parsed) = parse_item(item) {
                parsed.path = sanitize_class_name(&format!(
                    "{}\\{}",
                    prefix,
                    parsed.path.trim_start_matches('\\')
                ));
                out.push(parsed);
            }
        }
        return;
    }

    // `use A, B as C;`
    out.extend(statement.split(',').filter_map(parse_item));
}

fn parse_item(item: &str) -> Option<UseStatement> {
    let words: Vec<&str> = item.split_whitespace().collect();
    let (path, alias) = match words.as_slice() {
        [path] => (*path, None),
        [path, kw, alias] if kw.eq_ignore_ascii_case("as") => (*path, Some(*alias)),
        _ => return None,
    };

    // Closures (`function () use ($x)`) and trait adaptations also start
    // with `use`; anything that is not a plain name is not an import.
    if !path.bytes().all(is_identifier_byte) || path.contains('$') {
        return None;
    }
    if alias.is_some_and(|a| !a.bytes().all(is_identifier_byte)) {
        return None;
    }

    Some(UseStatement {
        path: sanitize_class_name(path),
        alias: alias.map(str::to_string),
    })
}
