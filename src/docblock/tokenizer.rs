//! Comment tokenizer.
//!
//! Splits a raw `/** ... */` block into tagged [`Segment`]s.  The leading
//! text of the block belongs to the [`DESCRIPTION`] segment; every line
//! whose first word starts with `@` opens a new segment named after that
//! tag, and the lines that follow are collected into it until the next
//! tag line.

/// Name of the implicit segment holding the text before the first tag.
pub const DESCRIPTION: &str = "description";

/// Name of the tag whose continuation lines keep their whitespace.
pub const EXAMPLE: &str = "example";

/// A run of comment lines belonging to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Tag name without the `@` (or [`DESCRIPTION`]).
    pub tag: &'a str,
    /// Words following the tag marker on the tag line itself.
    pub head: Vec<&'a str>,
    /// Continuation lines.  Trimmed, except inside [`EXAMPLE`].
    pub lines: Vec<&'a str>,
}

impl<'a> Segment<'a> {
    fn new(tag: &'a str, head: Vec<&'a str>) -> Self {
        Self {
            tag,
            head,
            lines: Vec::new(),
        }
    }

    /// Whether this segment preserves the original layout of its lines.
    pub fn is_verbatim(&self) -> bool {
        self.tag == EXAMPLE
    }

    /// Every word of the segment, head first, then continuation lines.
    pub fn words(&self) -> Vec<&'a str> {
        self.head
            .iter()
            .copied()
            .chain(self.lines.iter().flat_map(|line| line.split_whitespace()))
            .collect()
    }

    /// The accumulated text of the segment.
    ///
    /// Regular tags join their head and lines with a single space; the
    /// example tag joins lines with newlines so indentation survives.
    /// The result is trimmed.
    pub fn text(&self) -> String {
        let mut text = self.head.join(" ");
        let joiner = if self.is_verbatim() { "\n" } else { " " };
        for line in &self.lines {
            text.push_str(joiner);
            text.push_str(line);
        }
        text.trim().to_string()
    }
}

/// Strip the comment delimiters and the leading `*` marker of each line.
///
/// Only one space after the marker is removed, so indentation inside
/// code examples is kept relative to the `*` column.
pub fn clean_comment(raw: &str) -> String {
    let inner = raw.trim();
    let inner = inner
        .strip_prefix("/**")
        .or_else(|| inner.strip_prefix("/*"))
        .unwrap_or(inner);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    inner
        .lines()
        .map(strip_line_marker)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line_marker(line: &str) -> &str {
    match line.trim_start().strip_prefix('*') {
        Some(rest) => {
            let rest = rest.trim_start_matches('*');
            rest.strip_prefix([' ', '\t']).unwrap_or(rest)
        }
        None => line,
    }
}

/// Split a cleaned comment (see [`clean_comment`]) into segments.
///
/// The first segment is always the [`DESCRIPTION`], possibly empty.
/// Blank lines are skipped.
pub fn tokenize(cleaned: &str) -> Vec<Segment<'_>> {
    let mut segments = vec![Segment::new(DESCRIPTION, Vec::new())];

    for line in cleaned.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            continue;
        };

        if let Some(tag) = first.strip_prefix('@') {
            segments.push(Segment::new(tag, words[1..].to_vec()));
            continue;
        }

        if let Some(current) = segments.last_mut() {
            if current.is_verbatim() {
                current.lines.push(line);
            } else {
                current.lines.push(line.trim());
            }
        }
    }

    segments
}
