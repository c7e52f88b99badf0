//! Native enums as Python `enum` types.
//!
//! Generated bindings describe each C-style enum with a static
//! [`EnumTypeDescriptor`] and list all members of a module in one flat
//! [`MemberEntry`] table. This crate turns those into real `enum.Enum`,
//! `enum.IntEnum`, `enum.Flag` and `enum.IntFlag` types, created once on first
//! use, and converts values across the boundary.
//!
//! ```text
//! initialize(py)
//!   └─ register_enum(td, cursor, namespace)    once per enum, in table order
//!        └─ create_enum -> base class call -> descriptor handle -> cached in td
//! to_host_value / from_host_value
//!   └─ resolve(td) -> cached type, or TypeModule::materialize_scope
//! ```

mod convert;
mod descriptor;
mod error;
mod factory;
mod flavor;
mod member;
mod module;
mod resolve;
mod runtime;

pub use crate::{
    convert::{from_host_value, is_enum, is_flag, reverse_lookup, to_host_value},
    descriptor::{DescriptorRef, EnumTypeDescriptor, NativeInt, ScopeId, SlotFactory, TypeSlot},
    error::{EnumError, EnumResult},
    factory::{create_enum, register_enum, register_module_enums},
    flavor::{BaseClass, EnumFlavor},
    member::{MemberCursor, MemberEntry, Shortfall},
    module::TypeModule,
    resolve::resolve,
    runtime::{DESCRIPTOR_ATTR, EnumRuntime, initialize, is_initialized},
};
