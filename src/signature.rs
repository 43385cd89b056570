use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};

use crate::{
    arguments::{BoundArguments, CallArguments},
    errors::{BindErrorKind, SignatureErrorKind},
    value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParameterKind {
    PositionalOnly,
    PositionalOrKeyword,
    KeywordOnly,
}

impl ParameterKind {
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ParameterKind::PositionalOnly => "positional-only",
            ParameterKind::PositionalOrKeyword => "positional-or-keyword",
            ParameterKind::KeywordOnly => "keyword-only",
        }
    }
}

impl Display for ParameterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub(crate) name: String,
    pub(crate) kind: ParameterKind,
    pub(crate) default: Option<Value>,
}

impl ParameterSpec {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// An ordered parameter list authoritative for construction identity.
///
/// The receiver is the implicit leading parameter of initializer-like
/// callables. It is held apart from the parameter list, so it takes part in
/// neither binding nor keying.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    receiver: Option<String>,
    parameters: Vec<ParameterSpec>,
}

impl Signature {
    #[inline]
    #[must_use]
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    #[inline]
    #[must_use]
    pub fn receiver(&self) -> Option<&str> {
        self.receiver.as_deref()
    }

    /// A nullary signature degenerates the owning class into a singleton:
    /// its registry can hold at most one entry.
    #[inline]
    #[must_use]
    pub(crate) fn is_nullary(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Binds call arguments against this signature, applying declared
    /// defaults for omitted parameters.
    ///
    /// # Errors
    /// See [`BindErrorKind`].
    pub fn bind(&self, arguments: &CallArguments) -> Result<BoundArguments, BindErrorKind> {
        crate::binder::bind(self, arguments)
    }

    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    #[must_use]
    pub(crate) fn positional_capacity(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| parameter.kind != ParameterKind::KeywordOnly)
            .count()
    }
}

#[derive(Debug, Default)]
pub struct SignatureBuilder {
    receiver: Option<String>,
    parameters: Vec<ParameterSpec>,
}

impl SignatureBuilder {
    #[inline]
    #[must_use]
    pub fn receiver(mut self, name: impl Into<String>) -> Self {
        self.receiver = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[inline]
    #[must_use]
    pub fn positional_only(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::new(name, ParameterKind::PositionalOnly))
    }

    #[inline]
    #[must_use]
    pub fn positional_or_keyword(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::new(name, ParameterKind::PositionalOrKeyword))
    }

    #[inline]
    #[must_use]
    pub fn keyword_only(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterSpec::new(name, ParameterKind::KeywordOnly))
    }

    /// # Errors
    /// - Returns [`SignatureErrorKind::DuplicateParameter`] if a name occurs twice,
    ///   the receiver name included
    /// - Returns [`SignatureErrorKind::KindOrder`] if positional-only, positional-or-keyword
    ///   and keyword-only parameters aren't declared in that order
    pub fn build(self) -> Result<Signature, SignatureErrorKind> {
        let mut previous: Option<ParameterKind> = None;
        for (index, parameter) in self.parameters.iter().enumerate() {
            let duplicate = self.receiver.as_deref() == Some(&parameter.name)
                || self.parameters[..index].iter().any(|other| other.name == parameter.name);
            if duplicate {
                return Err(SignatureErrorKind::DuplicateParameter {
                    name: parameter.name.clone(),
                });
            }

            if let Some(previous) = previous {
                if parameter.kind < previous {
                    return Err(SignatureErrorKind::KindOrder {
                        name: parameter.name.clone(),
                        kind: parameter.kind,
                        previous,
                    });
                }
            }
            previous = Some(parameter.kind);
        }

        Ok(Signature {
            receiver: self.receiver,
            parameters: self.parameters,
        })
    }
}
