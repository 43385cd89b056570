use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{errors::KeyErrorKind, key::ConstructionKey, value::Value};

/// Call arguments in their original, pre-binding shape: an ordered sequence
/// of positional values and a name-keyed mapping of keyword values.
///
/// This is what factories receive; identity is decided by the bound form,
/// not by the call shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments {
    pub(crate) positional: Vec<Value>,
    pub(crate) keyword: BTreeMap<String, Value>,
}

impl CallArguments {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    #[inline]
    #[must_use]
    pub const fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }
}

/// Arguments after binding against a signature: one entry per declared
/// parameter, defaults applied, receiver excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArguments(pub(crate) BTreeMap<String, Value>);

impl BoundArguments {
    /// Canonicalizes into an order-independent, hashable construction key.
    ///
    /// # Errors
    /// Returns [`KeyErrorKind::UnhashableArgument`] if any bound value holds
    /// an opaque value or a NaN float.
    pub fn canonicalize(&self) -> Result<ConstructionKey, KeyErrorKind> {
        crate::key::canonicalize(self)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
