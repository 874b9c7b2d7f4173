use serde::Serialize;

use super::{CodeEntity, Documented, FunctionEntity};
use crate::util::sanitize_class_name;

/// Title layout used when none is configured.
pub const DEFAULT_TITLE_FORMAT: &str = "%label%: %name% %extra%";

/// A documented class or interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassEntity {
    #[serde(flatten)]
    code: CodeEntity,
    functions: Vec<FunctionEntity>,
    is_interface: bool,
    is_abstract: bool,
    has_ignore_tag: bool,
    has_internal_tag: bool,
    extends: String,
    interfaces: Vec<String>,
    is_native: bool,
}

impl ClassEntity {
    /// A class entity for `name`, normalised to its `\`-prefixed form.
    pub fn new(name: &str) -> Self {
        let mut class = Self::default();
        class.code.set_name(sanitize_class_name(name));
        class
    }

    /// Whether this entity describes the class called `name`.
    pub fn is_same(&self, name: &str) -> bool {
        sanitize_class_name(name).eq_ignore_ascii_case(self.code.name())
    }

    pub fn functions(&self) -> &[FunctionEntity] {
        &self.functions
    }

    pub fn set_functions(&mut self, functions: Vec<FunctionEntity>) {
        self.functions = functions;
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn set_interface(&mut self, is_interface: bool) {
        self.is_interface = is_interface;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn has_ignore_tag(&self) -> bool {
        self.has_ignore_tag
    }

    pub fn set_ignore_tag(&mut self, ignore: bool) {
        self.has_ignore_tag = ignore;
    }

    pub fn has_internal_tag(&self) -> bool {
        self.has_internal_tag
    }

    pub fn set_internal_tag(&mut self, internal: bool) {
        self.has_internal_tag = internal;
    }

    /// The parent class, empty when there is none.
    pub fn extends(&self) -> &str {
        &self.extends
    }

    pub fn set_extends(&mut self, extends: &str) {
        self.extends = sanitize_class_name(extends);
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn set_interfaces<I, S>(&mut self, interfaces: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interfaces = interfaces
            .into_iter()
            .map(|i| sanitize_class_name(i.as_ref()))
            .collect();
    }

    /// Whether the class is a built-in one without source.
    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn set_native(&mut self, native: bool) {
        self.is_native = native;
    }

    /// A heading describing the class.
    ///
    /// `format` may contain `%label%` (`Class` or `Interface`), `%name%`
    /// and `%extra%`.  With a label the extra part marks abstract classes;
    /// without one it also marks interfaces.  Names in the global
    /// namespace lose their leading `\`.
    pub fn title(&self, format: &str) -> String {
        let label = if self.is_interface { "Interface" } else { "Class" };

        let full_name = self.code.name();
        let name = if full_name.matches('\\').count() == 1 {
            full_name.trim_start_matches('\\')
        } else {
            full_name
        };

        let extra = if format.contains("%label%") {
            if self.is_abstract && !self.is_interface {
                "(abstract)"
            } else {
                ""
            }
        } else if self.is_interface {
            "(interface)"
        } else if self.is_abstract {
            "(abstract)"
        } else {
            ""
        };

        format
            .replace("%label%", label)
            .replace("%name%", name)
            .replace("%extra%", extra)
            .trim()
            .to_string()
    }

    /// A markdown anchor derived from the default title.
    pub fn anchor(&self) -> String {
        self.title(DEFAULT_TITLE_FORMAT)
            .chars()
            .filter(|c| !matches!(c, ':' | '\\' | '(' | ')'))
            .map(|c| if c == ' ' { '-' } else { c })
            .collect::<String>()
            .to_lowercase()
    }
}

impl Documented for ClassEntity {
    fn code(&self) -> &CodeEntity {
        &self.code
    }

    fn code_mut(&mut self) -> &mut CodeEntity {
        &mut self.code
    }
}
