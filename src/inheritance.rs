/// `@inheritDoc` resolution.
///
/// A method asking to inherit its documentation receives the entity of
/// the nearest declaration of the same name, searched in this order:
///
///   parent chain (nearest first) > own interfaces > ancestors' interfaces
///   > interfaces extended by those, breadth first
///
/// Ancestors the class loader does not know end the parent walk without
/// error.  A walk that revisits a class reports the cycle instead.
use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::entity::{ClassEntity, Documented, FunctionEntity};
use crate::error::{DocError, Result};
use crate::reflector::Documenter;
use crate::util::class_key;

impl Documenter<'_> {
    /// Find the declaration `method_name` inherits its documentation from.
    ///
    /// `is_abstract` is the abstract flag of the inheriting method.  When
    /// neither it nor `class` is abstract, the returned copy loses an
    /// abstract flag carried by the donor.
    pub(crate) fn find_inherited_function(
        &self,
        method_name: &str,
        is_abstract: bool,
        class: &ClassEntity,
        chain: &mut Vec<String>,
    ) -> Result<FunctionEntity> {
        let found = match self.find_in_parents(method_name, class, chain)? {
            Some(func) => Some(func),
            None => self.find_in_interfaces(method_name, class, chain)?,
        };

        let Some(mut func) = found else {
            return Err(DocError::InheritedDocNotFound {
                class: class.name().to_string(),
                method: method_name.to_string(),
            });
        };

        debug!(
            method = method_name,
            class = class.name(),
            donor = func.class(),
            "inherited documentation"
        );

        if !is_abstract && !class.is_abstract() && func.is_abstract() {
            func.set_abstract(false);
        }
        Ok(func)
    }

    /// Walk the `extends` chain looking for `method_name`.
    fn find_in_parents(
        &self,
        method_name: &str,
        class: &ClassEntity,
        chain: &mut Vec<String>,
    ) -> Result<Option<FunctionEntity>> {
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(class_key(class.name()));

        let mut parent = class.extends().to_string();
        while !parent.is_empty() {
            if !visited.insert(class_key(&parent)) {
                return Err(DocError::CyclicInheritance(parent));
            }
            let Some(ancestor) = self.load_class_entity(&parent, chain)? else {
                break;
            };
            if let Some(func) = find_function(&ancestor, method_name) {
                return Ok(Some(func.clone()));
            }
            parent = ancestor.extends().to_string();
        }
        Ok(None)
    }

    /// Search the interfaces of the class and of its ancestors, then the
    /// interfaces those extend.
    fn find_in_interfaces(
        &self,
        method_name: &str,
        class: &ClassEntity,
        chain: &mut Vec<String>,
    ) -> Result<Option<FunctionEntity>> {
        let mut queue: VecDeque<String> = self
            .collect_interfaces(class, chain)?
            .into_iter()
            .collect();
        let mut seen: HashSet<String> = queue.iter().map(|i| class_key(i)).collect();

        while let Some(interface) = queue.pop_front() {
            let Some(entity) = self.load_class_entity(&interface, chain)? else {
                continue;
            };
            if let Some(func) = find_function(&entity, method_name) {
                return Ok(Some(func.clone()));
            }
            for parent in entity.interfaces() {
                if seen.insert(class_key(parent)) {
                    queue.push_back(parent.clone());
                }
            }
        }
        Ok(None)
    }

    /// The interfaces of `class` in declaration order, followed by those
    /// of each ancestor, without repeats.
    fn collect_interfaces(
        &self,
        class: &ClassEntity,
        chain: &mut Vec<String>,
    ) -> Result<Vec<String>> {
        let mut interfaces: Vec<String> = Vec::new();
        push_unique(&mut interfaces, class.interfaces());

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(class_key(class.name()));
        let mut parent = class.extends().to_string();
        while !parent.is_empty() && visited.insert(class_key(&parent)) {
            let Some(ancestor) = self.load_class_entity(&parent, chain)? else {
                break;
            };
            push_unique(&mut interfaces, ancestor.interfaces());
            parent = ancestor.extends().to_string();
        }
        Ok(interfaces)
    }
}

fn find_function<'a>(class: &'a ClassEntity, method_name: &str) -> Option<&'a FunctionEntity> {
    class
        .functions()
        .iter()
        .find(|f| f.name().eq_ignore_ascii_case(method_name))
}

fn push_unique(out: &mut Vec<String>, names: &[String]) {
    for name in names {
        if !out.iter().any(|existing| class_key(existing) == class_key(name)) {
            out.push(name.clone());
        }
    }
}
