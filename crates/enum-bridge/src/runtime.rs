//! Process-wide enum runtime state.
//!
//! Holds the four base classes of Python's `enum` module and the attribute
//! names used when creating and inspecting enum types. The state is written
//! once by [`initialize`] and only read afterwards.

use pyo3::{
    prelude::*,
    sync::PyOnceLock,
    types::{PyString, PyType},
};

use crate::{
    error::{EnumError, EnumResult},
    flavor::BaseClass,
};

/// Name of the attribute that holds a type's [`DescriptorRef`](crate::DescriptorRef).
pub const DESCRIPTOR_ATTR: &str = "__enum_descriptor__";

static RUNTIME: PyOnceLock<EnumRuntime> = PyOnceLock::new();

/// The resolved `enum` base classes and interned attribute names.
#[derive(Debug)]
pub struct EnumRuntime {
    enum_type: Py<PyType>,
    int_enum_type: Py<PyType>,
    flag_type: Py<PyType>,
    int_flag_type: Py<PyType>,
    descriptor_attr: Py<PyString>,
    module_kw: Py<PyString>,
    qualname_kw: Py<PyString>,
    value_attr: Py<PyString>,
}

impl EnumRuntime {
    /// Resolves the runtime state from an `enum`-like module.
    ///
    /// Fails if any of the four base classes is missing or not a class; in that
    /// case every reference acquired so far is released.
    pub fn load(facility: &Bound<'_, PyModule>) -> EnumResult<Self> {
        let py = facility.py();
        let class = |base: BaseClass| -> EnumResult<Py<PyType>> {
            facility
                .getattr(base.attr_name())
                .and_then(|obj| obj.cast_into::<PyType>().map_err(PyErr::from))
                .map(Bound::unbind)
                .map_err(EnumError::InitializationFailure)
        };

        Ok(Self {
            enum_type: class(BaseClass::Enum)?,
            int_enum_type: class(BaseClass::IntEnum)?,
            flag_type: class(BaseClass::Flag)?,
            int_flag_type: class(BaseClass::IntFlag)?,
            descriptor_attr: PyString::intern(py, DESCRIPTOR_ATTR).unbind(),
            module_kw: PyString::intern(py, "module").unbind(),
            qualname_kw: PyString::intern(py, "qualname").unbind(),
            value_attr: PyString::intern(py, "value").unbind(),
        })
    }

    /// Returns the initialized state, or `NotInitialized`.
    pub fn get(py: Python<'_>) -> EnumResult<&'static Self> {
        RUNTIME.get(py).ok_or(EnumError::NotInitialized)
    }

    #[must_use]
    pub fn base_class<'py>(&self, py: Python<'py>, base: BaseClass) -> &Bound<'py, PyType> {
        match base {
            BaseClass::Enum => self.enum_type.bind(py),
            BaseClass::IntEnum => self.int_enum_type.bind(py),
            BaseClass::Flag => self.flag_type.bind(py),
            BaseClass::IntFlag => self.int_flag_type.bind(py),
        }
    }

    pub(crate) fn descriptor_attr<'py>(&self, py: Python<'py>) -> &Bound<'py, PyString> {
        self.descriptor_attr.bind(py)
    }

    pub(crate) fn module_kw<'py>(&self, py: Python<'py>) -> &Bound<'py, PyString> {
        self.module_kw.bind(py)
    }

    pub(crate) fn qualname_kw<'py>(&self, py: Python<'py>) -> &Bound<'py, PyString> {
        self.qualname_kw.bind(py)
    }

    pub(crate) fn value_attr<'py>(&self, py: Python<'py>) -> &Bound<'py, PyString> {
        self.value_attr.bind(py)
    }
}

/// Imports `enum` and stores the runtime state.
///
/// Must run before any other operation. Once it has succeeded, further calls
/// return immediately without touching the stored state.
pub fn initialize(py: Python<'_>) -> EnumResult<()> {
    RUNTIME.get_or_try_init(py, || {
        let facility = py.import("enum").map_err(EnumError::InitializationFailure)?;
        EnumRuntime::load(&facility)
    })?;
    Ok(())
}

/// Returns true if [`initialize`] has succeeded.
#[must_use]
pub fn is_initialized(py: Python<'_>) -> bool {
    RUNTIME.get(py).is_some()
}
