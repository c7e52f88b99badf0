//! Static descriptors of native enum types.
//!
//! A generated module declares one `static` [`EnumTypeDescriptor`] per enum.
//! The descriptor owns the Python type once it has been created, and the
//! Python type points back at the descriptor through an opaque
//! [`DescriptorRef`] so that native metadata can be recovered from a member.

use std::fmt;

use pyo3::{prelude::*, sync::PyOnceLock};

use crate::flavor::EnumFlavor;

/// Index of a type in the owning module's type table.
///
/// Used to name the composite type an enum is nested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

/// Builds the value of an extra attribute for a freshly created enum type.
pub type SlotFactory = for<'py> fn(Python<'py>) -> PyResult<Bound<'py, PyAny>>;

/// Extra behavior attached to an enum type after construction.
#[derive(Clone, Copy)]
pub struct TypeSlot {
    /// Attribute name, e.g. `__format__` or a method name.
    pub name: &'static str,
    pub factory: SlotFactory,
}

impl fmt::Debug for TypeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSlot").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Native description of one enum type.
pub struct EnumTypeDescriptor {
    name: &'static str,
    flavor: EnumFlavor,
    member_count: usize,
    scope: Option<ScopeId>,
    slots: Option<&'static [TypeSlot]>,
    /// The materialized Python type, written once.
    type_object: PyOnceLock<Py<PyAny>>,
}

impl EnumTypeDescriptor {
    #[must_use]
    pub const fn new(
        name: &'static str,
        flavor: EnumFlavor,
        member_count: usize,
        scope: Option<ScopeId>,
        slots: Option<&'static [TypeSlot]>,
    ) -> Self {
        Self {
            name,
            flavor,
            member_count,
            scope,
            slots,
            type_object: PyOnceLock::new(),
        }
    }

    /// The Python name of the enum (unqualified).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn flavor(&self) -> EnumFlavor {
        self.flavor
    }

    #[must_use]
    pub const fn member_count(&self) -> usize {
        self.member_count
    }

    /// The composite type this enum is nested in, or `None` for module level.
    #[must_use]
    pub const fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    #[must_use]
    pub const fn slots(&self) -> Option<&'static [TypeSlot]> {
        self.slots
    }

    /// Returns the Python type if it has already been created.
    #[must_use]
    pub fn type_object<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyAny>> {
        self.type_object.get(py).map(|t| t.bind(py).clone())
    }

    #[must_use]
    pub fn is_materialized(&self, py: Python<'_>) -> bool {
        self.type_object.get(py).is_some()
    }

    pub(crate) fn type_object_cell(&self) -> &PyOnceLock<Py<PyAny>> {
        &self.type_object
    }
}

impl fmt::Debug for EnumTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumTypeDescriptor")
            .field("name", &self.name)
            .field("flavor", &self.flavor)
            .field("member_count", &self.member_count)
            .field("scope", &self.scope)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

/// Opaque handle stored on a Python enum type, pointing at its descriptor.
///
/// The descriptor owns the type; this is a lookup-only reference back.
/// It cannot be constructed from Python.
#[pyclass(name = "EnumDescriptor", module = "enum_bridge", frozen)]
pub struct DescriptorRef {
    descriptor: &'static EnumTypeDescriptor,
}

impl DescriptorRef {
    #[must_use]
    pub fn new(descriptor: &'static EnumTypeDescriptor) -> Self {
        Self { descriptor }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static EnumTypeDescriptor {
        self.descriptor
    }
}

#[pymethods]
impl DescriptorRef {
    fn __repr__(&self) -> String {
        format!("<enum descriptor '{}' ({})>", self.descriptor.name, self.descriptor.flavor)
    }
}

/// A native enum value read back from Python, tagged with its signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeInt {
    Signed(i32),
    Unsigned(u32),
}

impl NativeInt {
    /// The value as stored in the member table.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Signed(v) => v,
            Self::Unsigned(v) => v.cast_signed(),
        }
    }
}

impl From<NativeInt> for i64 {
    fn from(value: NativeInt) -> Self {
        match value {
            NativeInt::Signed(v) => Self::from(v),
            NativeInt::Unsigned(v) => Self::from(v),
        }
    }
}

impl fmt::Display for NativeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_keeps_full_magnitude() {
        let value = NativeInt::Unsigned(u32::MAX);
        assert_eq!(i64::from(value), 4_294_967_295);
        assert_eq!(value.raw(), -1);
        assert_eq!(value.to_string(), "4294967295");
    }

    #[test]
    fn signed_is_unchanged() {
        let value = NativeInt::Signed(-7);
        assert_eq!(i64::from(value), -7);
        assert_eq!(value.raw(), -7);
    }

    #[test]
    fn descriptor_accessors() {
        static MODE: EnumTypeDescriptor = EnumTypeDescriptor::new("Mode", EnumFlavor::Plain, 2, None, None);
        assert_eq!(MODE.name(), "Mode");
        assert_eq!(MODE.member_count(), 2);
        assert_eq!(MODE.scope(), None);
        assert!(MODE.slots().is_none());
    }
}
