#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod arguments;
pub(crate) mod binder;
pub(crate) mod descriptor;
pub(crate) mod errors;
pub(crate) mod factory;
pub(crate) mod gate;
pub(crate) mod key;
pub(crate) mod registry;
pub(crate) mod service;
pub(crate) mod signature;
pub(crate) mod value;

pub mod utils;

pub use any::TypeInfo;
pub use arguments::{BoundArguments, CallArguments};
pub use descriptor::{ClassId, ClassSpec};
pub use errors::{
    BindErrorKind, ConstructErrorKind, DefinitionErrorKind, InstantiateErrorKind, KeyErrorKind, SignatureErrorKind, UnexpectedArgument,
};
pub use gate::ConstructionGate;
pub use key::ConstructionKey;
pub use signature::{ParameterKind, ParameterSpec, Signature, SignatureBuilder};
pub use value::{OpaqueValue, Value};
