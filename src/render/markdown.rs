//! Markdown function tables.

use std::sync::LazyLock;

use regex::Regex;

use super::TableGenerator;
use crate::entity::{Documented, FunctionEntity};
use crate::util::short_name;

// Continuation-line indents stripped from example code, widest first.
static INDENT_WIDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n {7}").unwrap());
static INDENT_MEDIUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n {4}").unwrap());
static INDENT_NARROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n {3}").unwrap());

/// Builds a `| Visibility | Function |` table, one row per method.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    markdown: String,
    class_name: String,
    /// `(function name, example)`, in row order.
    examples: Vec<(String, String)>,
    append_examples: bool,
    declare_abstraction: bool,
}

impl Default for MarkdownTable {
    fn default() -> Self {
        Self {
            markdown: String::new(),
            class_name: String::new(),
            examples: Vec::new(),
            append_examples: true,
            declare_abstraction: true,
        }
    }
}

impl MarkdownTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, line: &str) {
        self.markdown.push_str(line);
        self.markdown.push('\n');
    }

    fn signature(&self, func: &FunctionEntity) -> String {
        let mut out = String::from("<strong>");
        if self.declare_abstraction && func.is_abstract() {
            out.push_str("abstract ");
        }
        out.push_str(func.name());
        out.push('(');

        if func.has_params() {
            let params: Vec<String> = func
                .params()
                .iter()
                .map(|param| {
                    let default = param
                        .default_value()
                        .map(|d| format!("={}", d))
                        .unwrap_or_default();
                    format!(
                        "<em>{}</em> <strong>{}{}</strong>",
                        param.type_name(),
                        param.name(),
                        default
                    )
                })
                .collect();
            out.push_str("</strong>");
            out.push_str(&params.join(", "));
        }
        out.push(')');
        out.push_str(&format!("</strong> : <em>{}</em>", func.return_type()));
        out
    }
}

impl TableGenerator for MarkdownTable {
    fn open_table(&mut self) {
        self.markdown.clear();
        self.examples.clear();
        self.push_line("| Visibility | Function |");
        self.push_line("|:-----------|:---------|");
    }

    fn add_func(&mut self, func: &FunctionEntity, include_see: bool) -> String {
        self.class_name = func.class().to_string();

        let mut cell = self.signature(func);
        if func.is_deprecated() {
            cell = format!(
                "<strike>{}</strike><br /><em>DEPRECATED - {}</em>",
                cell,
                func.deprecation_message()
            );
        } else if !func.description().is_empty() {
            cell.push_str(&format!("<br /><em>{}</em>", func.description()));
        }
        if include_see && !func.see().is_empty() {
            cell.push_str(&format!(
                "<br /><em>&nbsp;&nbsp;&nbsp;&nbsp;See: {}</em>",
                func.see().join(", ")
            ));
        }
        let cell = cell
            .trim()
            .replace("</strong><strong>", "")
            .replace("</strong></strong> ", "</strong>");

        if !func.example().is_empty() {
            let name = func.name().to_string();
            match self.examples.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = func.example().to_string(),
                None => self.examples.push((name, func.example().to_string())),
            }
        }

        let mut first_col = func.visibility().as_str().to_string();
        if func.is_static() {
            first_col.push_str(" static");
        }
        let row = format!("| {} | {} |", first_col, cell);
        self.push_line(&row);
        row
    }

    fn table(&self) -> String {
        let mut table = self.markdown.trim().to_string();
        if self.append_examples {
            let class = short_name(&self.class_name);
            for (func, example) in &self.examples {
                table.push_str(&format!(
                    "\n###### Examples of {}::{}()\n{}",
                    class,
                    func,
                    format_example_comment(example)
                ));
            }
        }
        table
    }

    fn set_append_examples(&mut self, append: bool) {
        self.append_examples = append;
    }

    fn set_declare_abstraction(&mut self, declare: bool) {
        self.declare_abstraction = declare;
    }
}

/// Turn the text of an `@example` tag into a fenced code block.
///
/// A `<code>` wrapper is removed, the indentation of continuation lines
/// is reduced, and the fence language is guessed: `php` when the code
/// opens a PHP tag, `js` when it declares a `var` and holds no closing
/// markup tag.
pub fn format_example_comment(example: &str) -> String {
    let example = strip_code_tags(example);

    let example = [&*INDENT_WIDE, &*INDENT_MEDIUM, &*INDENT_NARROW]
        .into_iter()
        .find(|re| re.is_match(example))
        .map(|re| re.replace_all(example, "\n").into_owned())
        .unwrap_or_else(|| example.to_string());

    let lang = if example.contains("<?php") {
        "php"
    } else if example.contains("var ") && !example.contains("</") {
        "js"
    } else {
        ""
    };

    format!("```{}\n{}\n```", lang, example.trim())
}

fn strip_code_tags(example: &str) -> &str {
    if !example.contains("<code") {
        return example;
    }
    let before_close = match example.rfind("</code>") {
        Some(end) => &example[..end],
        None => example,
    };
    match before_close.find("<code>") {
        Some(start) => &before_close[start + "<code>".len()..],
        None => before_close,
    }
}
