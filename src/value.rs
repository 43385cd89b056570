use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
    vec::Vec,
};
use core::fmt::{self, Debug, Formatter};

use crate::{
    any::TypeInfo,
    utils::sharing::{AnyShared, SendBound, Shared, SyncBound},
};

/// A construction argument value.
///
/// Arguments cross the call surface as plain data so that the core never
/// introspects caller types at construction time. Every variant except
/// [`Value::Opaque`] can participate in a construction key.
#[derive(Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Arbitrary caller data carried through to the factory.
    ///
    /// Compared by pointer identity, so it can never be canonicalized into
    /// a construction key.
    Opaque(OpaqueValue),
}

impl Value {
    #[inline]
    #[must_use]
    pub fn opaque<T: SendBound + SyncBound + 'static>(value: T) -> Self {
        Self::Opaque(OpaqueValue {
            info: TypeInfo::of::<T>(),
            value: Shared::new(value),
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Shared::ptr_eq(&a.value, &b.value),
            _ => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("Unit"),
            Self::Bool(val) => f.debug_tuple("Bool").field(val).finish(),
            Self::Int(val) => f.debug_tuple("Int").field(val).finish(),
            Self::Float(val) => f.debug_tuple("Float").field(val).finish(),
            Self::Str(val) => f.debug_tuple("Str").field(val).finish(),
            Self::List(val) => f.debug_tuple("List").field(val).finish(),
            Self::Map(val) => f.debug_tuple("Map").field(val).finish(),
            Self::Opaque(val) => val.fmt(f),
        }
    }
}

#[derive(Clone)]
pub struct OpaqueValue {
    pub(crate) info: TypeInfo,
    pub(crate) value: AnyShared,
}

impl OpaqueValue {
    #[inline]
    #[must_use]
    pub const fn info(&self) -> TypeInfo {
        self.info
    }

    #[must_use]
    pub fn downcast<T: SendBound + SyncBound + 'static>(&self) -> Option<Shared<T>> {
        self.value.clone().downcast().ok()
    }
}

impl Debug for OpaqueValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.info.short_name())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::{vec, vec::Vec};

    use super::Value;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::from(1), Value::from(1i64));
        assert_ne!(Value::from(1), Value::from(2));
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from("test"), Value::from("test"));
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from("a")]),
            Value::from(vec![Value::from(1), Value::from("a")]),
        );
    }

    #[test]
    fn test_opaque_equality_is_identity() {
        struct Blob(#[allow(dead_code)] Vec<u8>);

        let val = Value::opaque(Blob(vec![1, 2, 3]));
        assert_eq!(val, val.clone());
        assert_ne!(val, Value::opaque(Blob(vec![1, 2, 3])));
    }
}
