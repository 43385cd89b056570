mod bind;
mod construct;
mod definition;
mod instantiate;
mod key;
mod signature;

pub use bind::{BindErrorKind, UnexpectedArgument};
pub use construct::ConstructErrorKind;
pub use definition::DefinitionErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use key::KeyErrorKind;
pub use signature::SignatureErrorKind;
