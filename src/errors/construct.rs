use core::any::TypeId;

use super::{bind::BindErrorKind, instantiate::InstantiateErrorKind, key::KeyErrorKind};

#[derive(thiserror::Error, Debug)]
pub enum ConstructErrorKind {
    #[error("Class not found in gate")]
    NoClass,
    #[error(transparent)]
    Bind(#[from] BindErrorKind),
    #[error(transparent)]
    Key(#[from] KeyErrorKind),
    #[error(transparent)]
    Factory(InstantiateErrorKind),
    #[error("Incorrect instance type. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType { expected: TypeId, actual: TypeId },
}
