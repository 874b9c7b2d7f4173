//! The documentation model.
//!
//! A run produces one [`ClassEntity`] per documented class, owning its
//! [`FunctionEntity`] list, which in turn owns its [`ParamEntity`] list.
//! All three share the fields of [`CodeEntity`] through composition and
//! expose them via the [`Documented`] trait.
//!
//! Entities are filled in through setters while a class is assembled and
//! only read afterwards.  They serialize to JSON for `--format json`.

mod class;
mod function;
mod param;

use serde::Serialize;

use crate::docblock::DocInfo;

pub use class::{ClassEntity, DEFAULT_TITLE_FORMAT};
pub use function::{FunctionEntity, FunctionVisibility};
pub use param::ParamEntity;

/// Fields shared by every documented piece of code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeEntity {
    name: String,
    description: String,
    deprecated: bool,
    deprecation_message: String,
    internal: bool,
    example: String,
    see: Vec<String>,
}

impl CodeEntity {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }

    pub fn deprecation_message(&self) -> &str {
        &self.deprecation_message
    }

    pub fn set_deprecation_message(&mut self, message: impl Into<String>) {
        self.deprecation_message = message.into();
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn set_internal(&mut self, internal: bool) {
        self.internal = internal;
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn set_example(&mut self, example: impl Into<String>) {
        self.example = example.into();
    }

    pub fn see(&self) -> &[String] {
        &self.see
    }

    pub fn set_see(&mut self, see: Vec<String>) {
        self.see = see;
    }
}

/// Access to the [`CodeEntity`] part of an entity.
pub trait Documented {
    fn code(&self) -> &CodeEntity;

    fn code_mut(&mut self) -> &mut CodeEntity;

    fn name(&self) -> &str {
        self.code().name()
    }

    fn description(&self) -> &str {
        self.code().description()
    }

    fn is_deprecated(&self) -> bool {
        self.code().is_deprecated()
    }

    fn deprecation_message(&self) -> &str {
        self.code().deprecation_message()
    }

    fn is_internal(&self) -> bool {
        self.code().is_internal()
    }

    fn example(&self) -> &str {
        self.code().example()
    }

    fn see(&self) -> &[String] {
        self.code().see()
    }

    /// Copy the description, example, `@see` references, `@internal` and
    /// `@deprecated` of a parsed comment onto the entity.
    fn apply_doc_info(&mut self, info: &DocInfo) {
        let code = self.code_mut();
        code.set_description(info.description());
        code.set_example(info.example());
        code.set_see(info.see().to_vec());
        code.set_internal(info.is_internal());
        if let Some(message) = info.deprecation_message() {
            code.set_deprecated(true);
            code.set_deprecation_message(message);
        }
    }
}
