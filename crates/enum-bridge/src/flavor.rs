//! Classification of native enums into the four Python enum flavors.
//!
//! A flavor decomposes into two independent axes:
//! - signedness: whether the native `i32` bit pattern is read as `u32`
//! - flag-ness: whether members combine bitwise (`enum.Flag` family)
//!
//! | Flavor          | Unsigned | Flag | Base class     |
//! |-----------------|----------|------|----------------|
//! | `Plain`         | no       | no   | `enum.Enum`    |
//! | `UnsignedPlain` | yes      | no   | `enum.IntEnum` |
//! | `Flag`          | yes      | yes  | `enum.Flag`    |
//! | `UnsignedFlag`  | yes      | yes  | `enum.IntFlag` |

use pyo3::{IntoPyObjectExt, prelude::*};

/// The flavor tag a code generator assigns to a native enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EnumFlavor {
    /// A plain scoped constant set, materialized as `enum.Enum`.
    Plain,
    /// An integer-backed enum whose values are read as unsigned.
    ///
    /// Python has no unsigned integer enum, so this is built on `enum.IntEnum`
    /// even though its values never go negative.
    UnsignedPlain,
    /// A bit-flag enum, materialized as `enum.Flag`.
    Flag,
    /// An integer-compatible bit-flag enum, materialized as `enum.IntFlag`.
    UnsignedFlag,
}

/// One of the four base classes exported by Python's `enum` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr)]
pub enum BaseClass {
    Enum,
    IntEnum,
    Flag,
    IntFlag,
}

impl EnumFlavor {
    /// Returns true if member values are reinterpreted as `u32`.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::UnsignedPlain | Self::Flag | Self::UnsignedFlag)
    }

    /// Returns true for the two flag flavors.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Flag | Self::UnsignedFlag)
    }

    /// Returns the Python base class used to construct enums of this flavor.
    #[must_use]
    pub const fn base_class(self) -> BaseClass {
        match self {
            Self::Plain => BaseClass::Enum,
            Self::UnsignedPlain => BaseClass::IntEnum,
            Self::Flag => BaseClass::Flag,
            Self::UnsignedFlag => BaseClass::IntFlag,
        }
    }

    /// Converts a raw table value to a Python int using this flavor's sign rule.
    ///
    /// Unsigned flavors reinterpret the bit pattern, so `-1` becomes `4294967295`.
    pub fn value_to_py(self, py: Python<'_>, raw: i32) -> PyResult<Bound<'_, PyAny>> {
        if self.is_unsigned() {
            raw.cast_unsigned().into_bound_py_any(py)
        } else {
            raw.into_bound_py_any(py)
        }
    }
}

impl BaseClass {
    /// The attribute name of this class in the `enum` module.
    #[must_use]
    pub fn attr_name(self) -> &'static str {
        self.into()
    }
}
