//! Creation of Python enum types from native descriptors.
//!
//! Each enum is built through the functional API of its flavor's base class:
//!
//! ```python
//! IntEnum("Color", [("RED", 0), ("GREEN", 1)], module="pkg.mod", qualname="Outer.Color")
//! ```
//!
//! The new type receives a [`DescriptorRef`] and any extra slots before it is
//! stored in the descriptor, so a type is never visible half-built.

use pyo3::{
    prelude::*,
    types::{PyDict, PyList, PyString, PyTuple},
};

use crate::{
    descriptor::{DescriptorRef, EnumTypeDescriptor},
    error::{EnumError, EnumResult},
    member::{MemberCursor, MemberEntry},
    module::TypeModule,
    runtime::EnumRuntime,
};

/// Creates the Python type for `td`, consuming its members from `cursor`.
///
/// The cursor always advances by `td.member_count()` entries on success, even
/// when the type already exists; in that case the existing type is returned.
pub fn create_enum<'py>(
    py: Python<'py>,
    module: &dyn TypeModule,
    td: &'static EnumTypeDescriptor,
    cursor: &mut MemberCursor<'_>,
) -> EnumResult<Bound<'py, PyAny>> {
    let rt = EnumRuntime::get(py)?;

    let entries = cursor
        .take(td.member_count())
        .map_err(|shortfall| EnumError::MemberExhaustion {
            enum_name: td.name(),
            required: shortfall.required,
            remaining: shortfall.remaining,
        })?;

    if let Some(existing) = td.type_object(py) {
        return Ok(existing);
    }

    let members = member_pairs(py, td, entries)?;

    let kwargs = PyDict::new(py);
    kwargs.set_item(rt.module_kw(py), module.module_name())?;
    // the default __qualname__ is wrong for nested enums
    let qualname = match td.scope() {
        Some(scope) => {
            let qualname = format!("{}.{}", module.scope_qualname(py, scope)?, td.name());
            kwargs.set_item(rt.qualname_kw(py), &qualname)?;
            Some(qualname)
        }
        None => None,
    };

    let base = rt.base_class(py, td.flavor().base_class());
    let enum_type = base
        .call((PyString::new(py, td.name()), members), Some(&kwargs))
        .map_err(|source| EnumError::HostConstruction {
            name: td.name(),
            source,
        })?;

    enum_type
        .setattr(rt.descriptor_attr(py), DescriptorRef::new(td))
        .map_err(|source| EnumError::AttachmentFailure {
            name: td.name(),
            source,
        })?;

    if let Some(slots) = td.slots() {
        module
            .add_type_slots(&enum_type, slots)
            .map_err(|source| EnumError::AttachmentFailure {
                name: td.name(),
                source,
            })?;
    }

    if td.type_object_cell().set(py, enum_type.clone().unbind()).is_err() {
        // a re-entrant materialization got there first; keep its type
        tracing::trace!(enum_name = td.name(), "enum already materialized, discarding duplicate");
        return td.type_object(py).ok_or(EnumError::NotMaterialized { name: td.name() });
    }

    tracing::debug!(
        enum_name = td.name(),
        flavor = %td.flavor(),
        members = td.member_count(),
        module = module.module_name(),
        qualname = qualname.as_deref(),
        "materialized enum"
    );
    Ok(enum_type)
}

/// Builds the ordered `(name, value)` pairs passed to the base class.
///
/// Pairs rather than a dict, so Python rejects a repeated name instead of
/// silently keeping the last one.
fn member_pairs<'py>(
    py: Python<'py>,
    td: &EnumTypeDescriptor,
    entries: &[MemberEntry],
) -> EnumResult<Bound<'py, PyList>> {
    let flavor = td.flavor();
    let pairs = PyList::empty(py);
    for entry in entries {
        let value = flavor.value_to_py(py, entry.value)?;
        pairs.append(PyTuple::new(py, [PyString::new(py, entry.name).into_any(), value])?)?;
    }
    Ok(pairs)
}

/// Creates the enum for `td` and binds it under its name in `namespace`.
///
/// Nothing is added to `namespace` if creation fails.
pub fn register_enum<'py>(
    py: Python<'py>,
    module: &dyn TypeModule,
    td: &'static EnumTypeDescriptor,
    cursor: &mut MemberCursor<'_>,
    namespace: &Bound<'py, PyDict>,
) -> EnumResult<Bound<'py, PyAny>> {
    let enum_type = create_enum(py, module, td, cursor)?;
    namespace.set_item(td.name(), &enum_type)?;
    Ok(enum_type)
}

/// Registers every enum of a scope in declaration order.
///
/// `enums` and `table` must come from the same generated scope; after the
/// last enum the table must be consumed exactly.
pub fn register_module_enums<'py>(
    py: Python<'py>,
    module: &dyn TypeModule,
    enums: &[&'static EnumTypeDescriptor],
    table: &[MemberEntry],
    namespace: &Bound<'py, PyDict>,
) -> EnumResult<()> {
    let mut cursor = MemberCursor::new(table);
    for &td in enums {
        register_enum(py, module, td, &mut cursor, namespace)?;
    }
    if cursor.is_exhausted() {
        Ok(())
    } else {
        Err(EnumError::TableMismatch {
            consumed: cursor.position(),
            length: cursor.table_len(),
        })
    }
}
