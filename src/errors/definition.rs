use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum DefinitionErrorKind {
    #[error("Class `{class}` declares no bind target")]
    MissingConfiguration { class: String },
    #[error("Bind target `{target}` doesn't name a callable of class `{class}`")]
    InvalidBindTarget { class: String, target: String },
    #[error("Parent of class `{class}` not found in gate")]
    UnknownParent { class: String },
}
