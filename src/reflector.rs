/// Class assembly.
///
/// The [`Documenter`] turns a class descriptor into a [`ClassEntity`]:
/// it parses the class and method comments, reconciles every parameter
/// and return type, resolves `@inheritDoc` requests through the
/// [inheritance resolver](crate::inheritance) and applies member
/// filtering and ordering.
///
/// Ancestor classes needed for inheritance are built once per run and
/// memoized by lowercased FQN.  They are built without the caller's
/// filters, since a filter on the documented class must not hide the
/// declaration a member inherits its docs from.
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::docblock::{DocInfo, is_class_reference, parse_doc_info, split_candidates};
use crate::entity::{ClassEntity, Documented, FunctionEntity, FunctionVisibility, ParamEntity};
use crate::error::{DocError, Result};
use crate::loader::ClassLoader;
use crate::reconcile::{
    TypeContext, is_native_class_reference, resolve_param_type, resolve_return_type,
};
use crate::types::{ClassDescriptor, DefaultValue, MethodDescriptor, Visibility};
use crate::use_statements::parse_use_statements;
use crate::util::{class_key, namespace_of, sanitize_class_name};

// ─── Filtering options ──────────────────────────────────────────────────────

/// One entry of a visibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    Public,
    Protected,
    Abstract,
    Final,
}

impl VisibilityFilter {
    fn matches(self, method: &MethodDescriptor) -> bool {
        match self {
            VisibilityFilter::Public => method.visibility == Visibility::Public,
            VisibilityFilter::Protected => method.visibility == Visibility::Protected,
            VisibilityFilter::Abstract => method.is_abstract,
            VisibilityFilter::Final => method.is_final,
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(VisibilityFilter::Public),
            "protected" => Ok(VisibilityFilter::Protected),
            "abstract" => Ok(VisibilityFilter::Abstract),
            "final" => Ok(VisibilityFilter::Final),
            other => Err(format!(
                "unknown visibility filter '{}' (expected public, protected, abstract or final)",
                other
            )),
        }
    }
}

/// Member filters applied to the documented class.  Empty means "keep
/// everything".
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Keep members matching any of these.
    pub visibility: Vec<VisibilityFilter>,
    /// Keep members whose name matches.
    pub method_pattern: Option<Regex>,
}

impl DocumentOptions {
    fn accepts(&self, method: &MethodDescriptor) -> bool {
        let visible =
            self.visibility.is_empty() || self.visibility.iter().any(|f| f.matches(method));
        let named = self
            .method_pattern
            .as_ref()
            .is_none_or(|re| re.is_match(&method.name));
        visible && named
    }
}

// ─── Documenter ─────────────────────────────────────────────────────────────

/// Builds [`ClassEntity`] values from the classes a [`ClassLoader`] knows.
pub struct Documenter<'l> {
    pub(crate) loader: &'l dyn ClassLoader,
    options: DocumentOptions,
    /// Unfiltered class entities, keyed by [`class_key`].
    cache: Mutex<HashMap<String, Arc<ClassEntity>>>,
}

impl<'l> Documenter<'l> {
    pub fn new(loader: &'l dyn ClassLoader) -> Self {
        Self::with_options(loader, DocumentOptions::default())
    }

    pub fn with_options(loader: &'l dyn ClassLoader, options: DocumentOptions) -> Self {
        Self {
            loader,
            options,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Document the class called `name`, applying the member filters.
    ///
    /// Fails when the class is unknown, when a member's `@inheritDoc`
    /// cannot be satisfied, or when the class hierarchy is cyclic.
    pub fn document(&self, name: &str) -> Result<ClassEntity> {
        let descriptor = self
            .loader
            .load_class(name)
            .ok_or_else(|| DocError::ClassNotFound(sanitize_class_name(name)))?;

        let mut chain = vec![class_key(&descriptor.name)];
        self.build_class(descriptor, Some(&self.options), &mut chain)
    }

    /// Unfiltered entity of an ancestor class, built at most once per run.
    ///
    /// `chain` holds the classes currently being built; re-entering one
    /// of them means the hierarchy loops.  Unknown classes yield `None`.
    pub(crate) fn load_class_entity(
        &self,
        name: &str,
        chain: &mut Vec<String>,
    ) -> Result<Option<Arc<ClassEntity>>> {
        let key = class_key(name);
        if let Some(cached) = self.cache.lock().get(&key).cloned() {
            return Ok(Some(cached));
        }
        if chain.contains(&key) {
            return Err(DocError::CyclicInheritance(sanitize_class_name(name)));
        }
        let Some(descriptor) = self.loader.load_class(name) else {
            debug!(class = name, "ancestor not known to the class loader");
            return Ok(None);
        };

        chain.push(key.clone());
        let built = self.build_class(descriptor, None, chain);
        chain.pop();

        let entity = Arc::new(built?);
        self.cache.lock().entry(key).or_insert_with(|| entity.clone());
        Ok(Some(entity))
    }

    fn build_class(
        &self,
        descriptor: &ClassDescriptor,
        filter: Option<&DocumentOptions>,
        chain: &mut Vec<String>,
    ) -> Result<ClassEntity> {
        debug!(class = %descriptor.name, filtered = filter.is_some(), "building class entity");

        let namespace = descriptor.namespace();
        let info = parse_doc_info(descriptor.doc_comment.as_deref().unwrap_or_default(), namespace);

        let mut class = ClassEntity::new(&descriptor.name);
        class.apply_doc_info(&info);
        class.set_interface(descriptor.is_interface);
        class.set_abstract(descriptor.is_abstract);
        class.set_native(descriptor.is_builtin);
        class.set_ignore_tag(info.should_be_ignored());
        class.set_internal_tag(info.is_internal());
        class.set_interfaces(&descriptor.interfaces);
        if let Some(parent) = descriptor.extends.as_deref().filter(|p| !p.trim().is_empty()) {
            class.set_extends(parent);
        }

        let imports = self
            .loader
            .source_text(descriptor)
            .map(|source| parse_use_statements(&source))
            .unwrap_or_default();
        let ctx = TypeContext {
            class_name: class.name(),
            imports: &imports,
        };

        let mut public = Vec::new();
        let mut protected = Vec::new();
        for method in &descriptor.methods {
            if filter.is_some_and(|f| !f.accepts(method)) {
                continue;
            }
            let Some(func) = self.build_function(method, &class, &ctx, chain)? else {
                continue;
            };
            match func.visibility() {
                FunctionVisibility::Public => public.push(func),
                FunctionVisibility::Protected => protected.push(func),
            }
        }
        public.sort_by(|a, b| a.name().cmp(b.name()));
        protected.sort_by(|a, b| a.name().cmp(b.name()));
        public.append(&mut protected);

        class.set_functions(public);
        Ok(class)
    }

    fn build_function(
        &self,
        method: &MethodDescriptor,
        class: &ClassEntity,
        ctx: &TypeContext<'_>,
        chain: &mut Vec<String>,
    ) -> Result<Option<FunctionEntity>> {
        let namespace = namespace_of(class.name());
        let info = parse_doc_info(method.doc_comment.as_deref().unwrap_or_default(), namespace);

        if is_excluded(method, &info, class) {
            return Ok(None);
        }

        if info.should_inherit_doc() {
            let inherited =
                self.find_inherited_function(&method.name, method.is_abstract, class, chain)?;
            return Ok(Some(inherited));
        }

        let mut func = FunctionEntity::new(&method.name);
        func.apply_doc_info(&info);
        func.set_todo(info.todos().to_vec());

        let return_type = resolve_return_type(info.return_type(), method, ctx);
        func.set_returning_native_class(is_native_class_reference(&return_type, self.loader));
        func.set_return_type(return_type);
        func.set_return_description(info.return_description());

        func.set_params(self.build_params(method, &info, class.name()));
        func.set_static(method.is_static);
        func.set_abstract(method.is_abstract);
        func.set_visibility(match method.visibility {
            Visibility::Protected => FunctionVisibility::Protected,
            _ => FunctionVisibility::Public,
        });
        func.set_class(class.name());

        Ok(Some(func))
    }

    fn build_params(
        &self,
        method: &MethodDescriptor,
        info: &DocInfo,
        class_name: &str,
    ) -> Vec<ParamEntity> {
        method
            .parameters
            .iter()
            .map(|descriptor| {
                let doc = info.param(descriptor.bare_name());
                let mut param = ParamEntity::new(descriptor.bare_name());
                if let Some(doc) = doc {
                    param.code_mut().set_description(doc.description.as_str());
                }

                let type_name = resolve_param_type(doc, descriptor, class_name);
                param.set_native_class_type(
                    split_candidates(&type_name)
                        .find(|c| {
                            is_class_reference(c)
                                && self.loader.is_builtin_class(c.trim_end_matches("[]"))
                        })
                        .map(str::to_string),
                );
                param.set_type_name(type_name);
                param.set_default_value(descriptor.default.as_ref().map(DefaultValue::render));
                param
            })
            .collect()
    }
}

/// Members dropped from the model: `@ignore`d, private, or declared on
/// another class.
fn is_excluded(method: &MethodDescriptor, info: &DocInfo, class: &ClassEntity) -> bool {
    info.should_be_ignored()
        || method.visibility == Visibility::Private
        || method
            .declaring_class
            .as_deref()
            .is_some_and(|declaring| !class.is_same(declaring))
}
