use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum KeyErrorKind {
    #[error("Value bound to `{name}` can't be canonicalized into a construction key")]
    UnhashableArgument { name: String },
}
