//! Interface to the type system of the module that owns a set of enums.

use pyo3::prelude::*;

use crate::descriptor::{ScopeId, TypeSlot};

/// The parts of a generated module's type system that enum creation relies on.
///
/// Implementations are expected to call back into
/// [`register_enum`](crate::register_enum) from [`materialize_scope`](Self::materialize_scope),
/// creating every enum of the scope in member table order.
pub trait TypeModule {
    /// The Python name of the owning module, used as the enums' `__module__`.
    fn module_name(&self) -> &str;

    /// Returns the `__qualname__` of the composite type identified by `scope`.
    fn scope_qualname(&self, py: Python<'_>, scope: ScopeId) -> PyResult<String>;

    /// Creates all lazily created attributes of a scope, including its enums.
    ///
    /// `None` is the module itself.
    fn materialize_scope(&self, py: Python<'_>, scope: Option<ScopeId>) -> PyResult<()>;

    /// Adds extra behavior to a newly created enum type.
    fn add_type_slots(&self, enum_type: &Bound<'_, PyAny>, slots: &[TypeSlot]) -> PyResult<()> {
        let py = enum_type.py();
        for slot in slots {
            enum_type.setattr(slot.name, (slot.factory)(py)?)?;
        }
        Ok(())
    }
}
