//! Error type shared by every enum bridge operation.
//!
//! Errors originating in Python keep the original `PyErr` so that converting
//! back with `PyErr::from` re-raises the exception Python produced. Errors
//! detected on the native side map to the closest built-in exception.

use std::fmt;

use pyo3::{
    PyErr,
    exceptions::{PyRuntimeError, PySystemError, PyTypeError},
};

pub type EnumResult<T> = Result<T, EnumError>;

#[derive(Debug)]
pub enum EnumError {
    /// A base class or name from the `enum` module could not be resolved.
    InitializationFailure(PyErr),
    /// An operation ran before [`initialize`](crate::initialize).
    NotInitialized,
    /// The member table ran out before an enum received all its members.
    MemberExhaustion {
        enum_name: &'static str,
        required: usize,
        remaining: usize,
    },
    /// Registration finished with unconsumed member table entries.
    TableMismatch { consumed: usize, length: usize },
    /// Calling the enum base class failed.
    HostConstruction { name: &'static str, source: PyErr },
    /// Attaching the descriptor handle or extra slots to a new type failed.
    AttachmentFailure { name: &'static str, source: PyErr },
    /// Materializing the owning scope did not create this enum.
    NotMaterialized { name: &'static str },
    /// A value is not a member of the expected enum.
    TypeMismatch { expected: &'static str, actual: String },
    /// Any other Python error, e.g. value lookup or int overflow.
    Host(PyErr),
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailure(err) => write!(f, "failed to initialize enum support: {err}"),
            Self::NotInitialized => write!(f, "enum support has not been initialized"),
            Self::MemberExhaustion {
                enum_name,
                required,
                remaining,
            } => write!(
                f,
                "enum '{enum_name}' needs {required} members but only {remaining} remain in the member table"
            ),
            Self::TableMismatch { consumed, length } => {
                write!(f, "member table has {length} entries but enums consumed {consumed}")
            }
            Self::HostConstruction { name, source } => write!(f, "failed to create enum '{name}': {source}"),
            Self::AttachmentFailure { name, source } => {
                write!(f, "failed to attach native data to enum '{name}': {source}")
            }
            Self::NotMaterialized { name } => write!(f, "enum '{name}' was not created by its scope"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "a member of enum '{expected}' is expected not '{actual}'")
            }
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EnumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InitializationFailure(err)
            | Self::HostConstruction { source: err, .. }
            | Self::AttachmentFailure { source: err, .. }
            | Self::Host(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PyErr> for EnumError {
    fn from(err: PyErr) -> Self {
        Self::Host(err)
    }
}

impl From<EnumError> for PyErr {
    fn from(err: EnumError) -> Self {
        match err {
            EnumError::InitializationFailure(err)
            | EnumError::HostConstruction { source: err, .. }
            | EnumError::AttachmentFailure { source: err, .. }
            | EnumError::Host(err) => err,
            EnumError::TypeMismatch { .. } => PyTypeError::new_err(err.to_string()),
            EnumError::MemberExhaustion { .. } | EnumError::TableMismatch { .. } => {
                PySystemError::new_err(err.to_string())
            }
            EnumError::NotInitialized | EnumError::NotMaterialized { .. } => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
