use serde::Serialize;

use super::{CodeEntity, Documented, ParamEntity};

/// Visibility of a documented method.  Private methods never make it into
/// the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionVisibility {
    #[default]
    Public,
    Protected,
}

impl FunctionVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionVisibility::Public => "public",
            FunctionVisibility::Protected => "protected",
        }
    }
}

/// A documented method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionEntity {
    #[serde(flatten)]
    code: CodeEntity,
    params: Vec<ParamEntity>,
    return_type: String,
    return_description: String,
    visibility: FunctionVisibility,
    is_static: bool,
    is_abstract: bool,
    class: String,
    todo: Vec<String>,
    returns_native_class: bool,
}

impl Default for FunctionEntity {
    fn default() -> Self {
        Self {
            code: CodeEntity::default(),
            params: Vec::new(),
            return_type: "void".to_string(),
            return_description: String::new(),
            visibility: FunctionVisibility::Public,
            is_static: false,
            is_abstract: false,
            class: String::new(),
            todo: Vec::new(),
            returns_native_class: false,
        }
    }
}

impl FunctionEntity {
    pub fn new(name: &str) -> Self {
        let mut func = Self::default();
        func.code.set_name(name);
        func
    }

    pub fn params(&self) -> &[ParamEntity] {
        &self.params
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn set_params(&mut self, params: Vec<ParamEntity>) {
        self.params = params;
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn set_return_type(&mut self, return_type: impl Into<String>) {
        self.return_type = return_type.into();
    }

    pub fn return_description(&self) -> &str {
        &self.return_description
    }

    pub fn set_return_description(&mut self, description: impl Into<String>) {
        self.return_description = description.into();
    }

    pub fn visibility(&self) -> FunctionVisibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: FunctionVisibility) {
        self.visibility = visibility;
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    /// Name of the class the method was documented on.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = class.into();
    }

    pub fn todo(&self) -> &[String] {
        &self.todo
    }

    pub fn set_todo(&mut self, todo: Vec<String>) {
        self.todo = todo;
    }

    /// Whether the return type is a built-in class without source.
    pub fn is_returning_native_class(&self) -> bool {
        self.returns_native_class
    }

    pub fn set_returning_native_class(&mut self, native: bool) {
        self.returns_native_class = native;
    }
}

impl Documented for FunctionEntity {
    fn code(&self) -> &CodeEntity {
        &self.code
    }

    fn code_mut(&mut self) -> &mut CodeEntity {
        &mut self.code
    }
}
