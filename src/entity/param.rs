use serde::Serialize;

use super::{CodeEntity, Documented};

/// A function parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParamEntity {
    #[serde(flatten)]
    code: CodeEntity,
    #[serde(rename = "type")]
    type_name: String,
    default: Option<String>,
    native_class_type: Option<String>,
}

impl ParamEntity {
    /// A parameter named `$name` (the `$` is added when missing).
    pub fn new(name: &str) -> Self {
        let mut param = Self::default();
        param
            .code
            .set_name(format!("${}", name.trim().trim_start_matches('$')));
        param.type_name = "mixed".to_string();
        param
    }

    /// The type, possibly several `/`-separated candidates.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
    }

    /// Rendered default value; `None` means the parameter is required.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn set_default_value(&mut self, default: Option<String>) {
        self.default = default;
    }

    /// The first candidate type naming a built-in class, if any.
    pub fn native_class_type(&self) -> Option<&str> {
        self.native_class_type.as_deref()
    }

    pub fn set_native_class_type(&mut self, native: Option<String>) {
        self.native_class_type = native;
    }
}

impl Documented for ParamEntity {
    fn code(&self) -> &CodeEntity {
        &self.code
    }

    fn code_mut(&mut self) -> &mut CodeEntity {
        &mut self.code
    }
}
