//! Lazy lookup of the Python type behind a descriptor.

use pyo3::prelude::*;

use crate::{
    descriptor::EnumTypeDescriptor,
    error::{EnumError, EnumResult},
    module::TypeModule,
};

/// Returns the Python type for `td`, creating it on first use.
///
/// Enums are not created one at a time: a miss materializes the whole owning
/// scope, which creates `td` together with its siblings.
pub fn resolve<'py>(
    py: Python<'py>,
    module: &dyn TypeModule,
    td: &EnumTypeDescriptor,
) -> EnumResult<Bound<'py, PyAny>> {
    if let Some(enum_type) = td.type_object(py) {
        return Ok(enum_type);
    }

    tracing::trace!(enum_name = td.name(), scope = ?td.scope(), "materializing scope of enum");
    module.materialize_scope(py, td.scope())?;

    td.type_object(py).ok_or(EnumError::NotMaterialized { name: td.name() })
}
