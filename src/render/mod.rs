//! Markdown rendering of the documentation model.
//!
//! [`render_class`] lays out one class document; the function table
//! inside it is produced by a [`TableGenerator`], of which
//! [`MarkdownTable`] is the stock implementation.

pub mod markdown;

use crate::entity::{ClassEntity, DEFAULT_TITLE_FORMAT, Documented, FunctionEntity};

pub use markdown::{MarkdownTable, format_example_comment};

/// Something that lays out the methods of a class as a table.
pub trait TableGenerator {
    /// Start a new table, discarding any previous rows and examples.
    fn open_table(&mut self);

    /// Add a row describing `func` and return it.
    fn add_func(&mut self, func: &FunctionEntity, include_see: bool) -> String;

    /// The finished table, followed by the collected examples when
    /// example appending is on.
    fn table(&self) -> String;

    fn set_append_examples(&mut self, append: bool);

    /// Whether abstract methods are marked as such.
    fn set_declare_abstraction(&mut self, declare: bool);
}

/// Layout switches for [`render_class`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub include_see: bool,
    pub append_examples: bool,
    pub declare_abstraction: bool,
    pub title_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_see: false,
            append_examples: true,
            declare_abstraction: true,
            title_format: DEFAULT_TITLE_FORMAT.to_string(),
        }
    }
}

/// Render one class as a markdown document.
pub fn render_class(class: &ClassEntity, options: &RenderOptions) -> String {
    let mut out = format!(
        "<a name=\"{}\"></a>\n### {}\n\n",
        class.anchor(),
        class.title(&options.title_format)
    );

    if !class.description().is_empty() {
        out.push_str(&format!("> {}\n\n", class.description()));
    }
    if class.is_deprecated() {
        out.push_str(&format!(
            "> **DEPRECATED** {}\n\n",
            class.deprecation_message()
        ));
    }
    if !class.extends().is_empty() {
        out.push_str(&format!("*This class extends {}*\n\n", class.extends()));
    }
    if !class.interfaces().is_empty() {
        let label = if class.is_interface() {
            "This interface extends"
        } else {
            "This class implements"
        };
        out.push_str(&format!("*{} {}*\n\n", label, class.interfaces().join(", ")));
    }

    let mut table = MarkdownTable::new();
    table.set_append_examples(options.append_examples);
    table.set_declare_abstraction(options.declare_abstraction);
    table.open_table();
    for func in class.functions() {
        table.add_func(func, options.include_see);
    }
    out.push_str(&table.table());
    out.push('\n');

    if !class.see().is_empty() {
        out.push_str("\n###### See also\n\n");
        for see in class.see() {
            out.push_str(&format!("- {}\n", see));
        }
    }

    out
}
