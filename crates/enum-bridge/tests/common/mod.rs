//! A minimal generated-module stand-in used by the integration tests.
//!
//! The module owns one module-level scope plus a list of class scopes indexed
//! by `ScopeId`. Each scope has its own enums and member table and is
//! materialized at most once.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::Cell;

use enum_bridge::{EnumTypeDescriptor, MemberEntry, ScopeId, TypeModule, register_module_enums};
use pyo3::{exceptions::PyKeyError, prelude::*, types::PyDict};

/// The enums and members of one scope, plus the namespace they land in.
pub struct Scope {
    pub qualname: &'static str,
    pub enums: &'static [&'static EnumTypeDescriptor],
    pub members: &'static [MemberEntry],
    pub namespace: Py<PyDict>,
    materialized: Cell<bool>,
}

impl Scope {
    pub fn new(
        py: Python<'_>,
        qualname: &'static str,
        enums: &'static [&'static EnumTypeDescriptor],
        members: &'static [MemberEntry],
    ) -> Self {
        Self {
            qualname,
            enums,
            members,
            namespace: PyDict::new(py).unbind(),
            materialized: Cell::new(false),
        }
    }

    pub fn namespace<'py>(&self, py: Python<'py>) -> &Bound<'py, PyDict> {
        self.namespace.bind(py)
    }
}

pub struct TestModule {
    pub name: &'static str,
    pub module_scope: Scope,
    pub types: Vec<Scope>,
    /// Number of scopes actually materialized.
    pub materializations: Cell<usize>,
}

impl TestModule {
    pub fn new(
        py: Python<'_>,
        name: &'static str,
        enums: &'static [&'static EnumTypeDescriptor],
        members: &'static [MemberEntry],
    ) -> Self {
        Self {
            name,
            module_scope: Scope::new(py, name, enums, members),
            types: Vec::new(),
            materializations: Cell::new(0),
        }
    }

    #[must_use]
    pub fn with_type(mut self, scope: Scope) -> Self {
        self.types.push(scope);
        self
    }

    fn scope(&self, scope: Option<ScopeId>) -> PyResult<&Scope> {
        match scope {
            None => Ok(&self.module_scope),
            Some(ScopeId(index)) => self
                .types
                .get(index)
                .ok_or_else(|| PyKeyError::new_err(format!("no type with index {index}"))),
        }
    }
}

impl TypeModule for TestModule {
    fn module_name(&self) -> &str {
        self.name
    }

    fn scope_qualname(&self, _py: Python<'_>, scope: ScopeId) -> PyResult<String> {
        Ok(self.scope(Some(scope))?.qualname.to_owned())
    }

    fn materialize_scope(&self, py: Python<'_>, scope: Option<ScopeId>) -> PyResult<()> {
        let target = self.scope(scope)?;
        if target.materialized.replace(true) {
            return Ok(());
        }
        self.materializations.set(self.materializations.get() + 1);
        register_module_enums(py, self, target.enums, target.members, target.namespace(py))?;
        Ok(())
    }
}

/// Attaches to the interpreter with enum support initialized.
pub fn with_enums<R>(f: impl for<'py> FnOnce(Python<'py>) -> R) -> R {
    Python::attach(|py| {
        enum_bridge::initialize(py).unwrap();
        f(py)
    })
}
