//! The Class Model (spec §3, §4.2): the in-memory IR the parser builds
//! monotonically and the emitter walks read-only.
//!
//! Spec §4.2 frames `get`/`get_all`/`add` as one generic contract keyed
//! by an entity-kind tag (`variable`, `method`, `constructor`, `nested`).
//! Rust has no convenient way to express that dispatch without boxing or
//! a trait object per call site, so this is rendered as one typed method
//! pair per kind instead — the same contract, the same rejection rules,
//! just resolved at compile time rather than by a runtime tag.

use indexmap::IndexMap;

use j2p_util::diagnostic::{Handler, Halt};

use crate::member::{Method, Variable};
use crate::modifiers::ModifierFilter;

#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    pub name: String,
    pub superclass_name: String,
    pub variables: IndexMap<String, Variable>,
    /// Keyed by method name; each value is every overload of that name,
    /// in declaration order, so arity is looked up positionally.
    pub methods: IndexMap<String, Vec<Method>>,
    pub constructors: Vec<Method>,
    pub nested: IndexMap<String, Class>,
}

/// The reserved root of *P*'s class hierarchy, used when a *J* class has
/// no `extends` clause (spec §3).
pub const ROOT_SUPERCLASS: &str = "object";

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass_name: ROOT_SUPERCLASS.to_string(),
            variables: IndexMap::new(),
            methods: IndexMap::new(),
            constructors: Vec::new(),
            nested: IndexMap::new(),
        }
    }

    // -- variables --------------------------------------------------

    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn get_all_variables(&self, filter: Option<ModifierFilter>) -> Vec<&Variable> {
        self.variables
            .values()
            .filter(|v| filter.map_or(true, |f| f.matches(&v.modifiers)))
            .collect()
    }

    pub fn add_variable(&mut self, var: Variable, handler: &Handler, line: usize) -> Result<(), Halt> {
        if self.variables.contains_key(&var.name) {
            return handler.report(
                line,
                var.name.clone(),
                format!("{} already declares a variable named {}", self.name, var.name),
            );
        }
        self.variables.insert(var.name.clone(), var);
        Ok(())
    }

    // -- methods ------------------------------------------------------

    pub fn get_method(&self, name: &str, arity: usize) -> Option<&Method> {
        self.methods.get(name)?.iter().find(|m| m.arity() == arity)
    }

    pub fn get_method_overloads(&self, name: &str) -> &[Method] {
        self.methods.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct method names, in first-declaration order.
    pub fn get_all_method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    pub fn add_method(&mut self, method: Method, handler: &Handler, line: usize) -> Result<(), Halt> {
        let overloads = self.methods.entry(method.name.clone()).or_default();
        if overloads.iter().any(|m| m.arity() == method.arity()) {
            return handler.report(
                line,
                method.name.clone(),
                format!(
                    "{} already declares a {}-argument overload of {}",
                    self.name,
                    method.arity(),
                    method.name
                ),
            );
        }
        overloads.push(method);
        Ok(())
    }

    // -- constructors ---------------------------------------------------

    pub fn get_constructor(&self, arity: usize) -> Option<&Method> {
        self.constructors.iter().find(|m| m.arity() == arity)
    }

    pub fn get_all_constructors(&self) -> &[Method] {
        &self.constructors
    }

    pub fn add_constructor(&mut self, ctor: Method, handler: &Handler, line: usize) -> Result<(), Halt> {
        if self.constructors.iter().any(|m| m.arity() == ctor.arity()) {
            return handler.report(
                line,
                self.name.clone(),
                format!(
                    "{} already declares a {}-argument constructor",
                    self.name,
                    ctor.arity()
                ),
            );
        }
        self.constructors.push(ctor);
        Ok(())
    }

    // -- nested classes -------------------------------------------------

    pub fn get_nested(&self, name: &str) -> Option<&Class> {
        self.nested.get(name)
    }

    pub fn get_all_nested(&self) -> Vec<&Class> {
        self.nested.values().collect()
    }

    pub fn add_nested(&mut self, class: Class, handler: &Handler, line: usize) -> Result<(), Halt> {
        if self.nested.contains_key(&class.name) {
            return handler.report(
                line,
                class.name.clone(),
                format!("{} already declares a nested class named {}", self.name, class.name),
            );
        }
        self.nested.insert(class.name.clone(), class);
        Ok(())
    }

    pub fn declares_main(&self) -> bool {
        self.methods.contains_key("main")
    }
}
