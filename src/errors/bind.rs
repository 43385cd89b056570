use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum BindErrorKind {
    #[error("Missing required argument `{name}`")]
    MissingArgument { name: String },
    #[error("Got multiple values for argument `{name}`")]
    DuplicateArgument { name: String },
    #[error(transparent)]
    UnexpectedArgument(#[from] UnexpectedArgument),
}

#[derive(thiserror::Error, Debug)]
pub enum UnexpectedArgument {
    #[error("Got an unexpected keyword argument `{name}`")]
    Keyword { name: String },
    #[error("Takes {expected} positional arguments but {given} were given")]
    Positional { expected: usize, given: usize },
}
