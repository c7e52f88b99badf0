//! Conversion between native enum values and Python enum members.
//!
//! - `to_host_value`: native `i32` -> member of the materialized type
//! - `from_host_value`: member -> native value, rejecting other types
//! - `is_flag` / `is_enum`: classification used by generic marshaling
//! - `reverse_lookup`: member or type -> originating descriptor

use pyo3::{prelude::*, types::PyType};

use crate::{
    descriptor::{DescriptorRef, EnumTypeDescriptor, NativeInt},
    error::{EnumError, EnumResult},
    flavor::BaseClass,
    module::TypeModule,
    resolve::resolve,
    runtime::EnumRuntime,
};

/// Returns the member of `td`'s type whose value is `raw`.
///
/// Unknown values are handled by Python: `Enum` and `IntEnum` raise
/// `ValueError`, flags produce a composite pseudo-member.
pub fn to_host_value<'py>(
    py: Python<'py>,
    module: &dyn TypeModule,
    raw: i32,
    td: &EnumTypeDescriptor,
) -> EnumResult<Bound<'py, PyAny>> {
    let enum_type = resolve(py, module, td)?;
    let value = td.flavor().value_to_py(py, raw)?;
    Ok(enum_type.call1((value,))?)
}

/// Reads the native value of a member of `td`'s type.
///
/// `obj` must be an instance of that exact enum type; plain ints and members
/// of other enums are rejected with `TypeMismatch`.
pub fn from_host_value(
    py: Python<'_>,
    module: &dyn TypeModule,
    obj: &Bound<'_, PyAny>,
    td: &EnumTypeDescriptor,
) -> EnumResult<NativeInt> {
    let rt = EnumRuntime::get(py)?;
    let enum_type = resolve(py, module, td)?;

    if !obj.is_instance(&enum_type)? {
        return Err(EnumError::TypeMismatch {
            expected: td.name(),
            actual: obj.get_type().name()?.to_string(),
        });
    }

    let value = obj.getattr(rt.value_attr(py))?;
    // flags are implicitly unsigned
    if td.flavor().is_unsigned() {
        Ok(NativeInt::Unsigned(value.extract()?))
    } else {
        Ok(NativeInt::Signed(value.extract()?))
    }
}

/// Returns true if `obj` is a flag enum type or a member of one.
///
/// Covers both `enum.Flag` and `enum.IntFlag`. Always false before
/// initialization.
#[must_use]
pub fn is_flag(obj: &Bound<'_, PyAny>) -> bool {
    inherits_from(obj, BaseClass::Flag)
}

/// Returns true if `obj` is any `enum.Enum` type or a member of one.
#[must_use]
pub fn is_enum(obj: &Bound<'_, PyAny>) -> bool {
    inherits_from(obj, BaseClass::Enum)
}

/// Returns the descriptor an enum type or member was created from.
///
/// `None` for anything that is not an enum created by this crate.
#[must_use]
pub fn reverse_lookup(obj: &Bound<'_, PyAny>) -> Option<&'static EnumTypeDescriptor> {
    let py = obj.py();
    let rt = EnumRuntime::get(py).ok()?;
    if !is_enum(obj) {
        return None;
    }

    let handle = obj.getattr(rt.descriptor_attr(py)).ok()?;
    let handle = handle.cast::<DescriptorRef>().ok()?;
    Some(handle.get().descriptor())
}

/// Checks `obj` (or the type of `obj` when it is not a class) against a base class.
fn inherits_from(obj: &Bound<'_, PyAny>, base: BaseClass) -> bool {
    let py = obj.py();
    let Ok(rt) = EnumRuntime::get(py) else {
        return false;
    };
    let base = rt.base_class(py, base);
    match obj.cast::<PyType>() {
        Ok(ty) => ty.is_subclass(base).unwrap_or(false),
        Err(_) => obj.get_type().is_subclass(base).unwrap_or(false),
    }
}
