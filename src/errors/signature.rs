use alloc::string::String;

use crate::signature::ParameterKind;

#[derive(thiserror::Error, Debug)]
pub enum SignatureErrorKind {
    #[error("Parameter `{name}` is declared more than once")]
    DuplicateParameter { name: String },
    #[error("{kind} parameter `{name}` declared after a {previous} parameter")]
    KindOrder {
        name: String,
        kind: ParameterKind,
        previous: ParameterKind,
    },
}
