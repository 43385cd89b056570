use alloc::{string::String, vec::Vec};

use crate::{arguments::BoundArguments, errors::KeyErrorKind, value::Value};

/// One keyable value. Mirrors [`Value`] without `Opaque`, with floats held
/// as normalized IEEE bits so the whole tree is `Eq + Ord + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum KeyComponent {
    Unit,
    Bool(bool),
    Int(i64),
    FloatBits(u64),
    Str(String),
    List(Vec<KeyComponent>),
    Map(Vec<(String, KeyComponent)>),
}

/// An order-independent, hashable representation of bound arguments:
/// `(name, component)` pairs sorted by parameter name.
///
/// Two bound-argument mappings with the same `(name, value)` pairs produce
/// equal keys no matter the original call shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstructionKey(Vec<(String, KeyComponent)>);

/// Canonicalizes bound arguments into a registry key. Pure.
///
/// # Errors
/// Returns [`KeyErrorKind::UnhashableArgument`] if any bound value holds an
/// opaque value or a NaN float, however deeply nested.
pub(crate) fn canonicalize(bound: &BoundArguments) -> Result<ConstructionKey, KeyErrorKind> {
    let mut components = Vec::with_capacity(bound.0.len());
    // BTreeMap iteration comes out sorted by parameter name
    for (name, value) in &bound.0 {
        components.push((name.clone(), component(name, value)?));
    }
    Ok(ConstructionKey(components))
}

fn component(parameter: &str, value: &Value) -> Result<KeyComponent, KeyErrorKind> {
    match value {
        Value::Unit => Ok(KeyComponent::Unit),
        Value::Bool(val) => Ok(KeyComponent::Bool(*val)),
        Value::Int(val) => Ok(KeyComponent::Int(*val)),
        Value::Float(val) => {
            if val.is_nan() {
                // NaN isn't equal to itself, so it can't key anything
                return Err(KeyErrorKind::UnhashableArgument {
                    name: parameter.into(),
                });
            }
            // -0.0 == 0.0, their bit patterns must collide too
            let normalized = if *val == 0.0 { 0.0 } else { *val };
            Ok(KeyComponent::FloatBits(normalized.to_bits()))
        }
        Value::Str(val) => Ok(KeyComponent::Str(val.clone())),
        Value::List(items) => {
            let mut components = Vec::with_capacity(items.len());
            for item in items {
                components.push(component(parameter, item)?);
            }
            Ok(KeyComponent::List(components))
        }
        Value::Map(entries) => {
            let mut components = Vec::with_capacity(entries.len());
            for (name, item) in entries {
                components.push((name.clone(), component(parameter, item)?));
            }
            Ok(KeyComponent::Map(components))
        }
        Value::Opaque(_) => Err(KeyErrorKind::UnhashableArgument {
            name: parameter.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::canonicalize;
    use crate::{binder::bind, errors::KeyErrorKind, signature::Signature, value::Value};

    fn signature() -> Signature {
        Signature::builder()
            .positional_or_keyword("a")
            .positional_or_keyword("b")
            .build()
            .unwrap()
    }

    fn key_for(arguments: &crate::CallArguments) -> Result<super::ConstructionKey, KeyErrorKind> {
        canonicalize(&bind(&signature(), arguments).unwrap())
    }

    #[test]
    fn test_call_shape_independence() {
        let positional = key_for(&call_args![1, "test"]).unwrap();
        let keyword = key_for(&call_args![; b = "test", a = 1]).unwrap();
        let mixed = key_for(&call_args![1; b = "test"]).unwrap();

        assert_eq!(positional, keyword);
        assert_eq!(positional, mixed);
    }

    #[test]
    fn test_distinct_values_distinct_keys() {
        let one = key_for(&call_args![1, "test"]).unwrap();
        let other = key_for(&call_args![2, "test"]).unwrap();

        assert_ne!(one, other);
    }

    #[test]
    fn test_value_equality_not_identity() {
        let one = key_for(&call_args![1, Value::from(vec![Value::from("x")])]).unwrap();
        let other = key_for(&call_args![1, Value::from(vec![Value::from("x")])]).unwrap();

        assert_eq!(one, other);
    }

    #[test]
    fn test_negative_zero_collides_with_zero() {
        let negative = key_for(&call_args![-0.0, 1]).unwrap();
        let positive = key_for(&call_args![0.0, 1]).unwrap();

        assert_eq!(negative, positive);
    }

    #[test]
    fn test_nan_is_unhashable() {
        let err = key_for(&call_args![f64::NAN, 1]).unwrap_err();
        assert!(matches!(err, KeyErrorKind::UnhashableArgument { name } if name == "a"));
    }

    #[test]
    fn test_opaque_is_unhashable() {
        struct Handle;

        let err = key_for(&call_args![1, Value::opaque(Handle)]).unwrap_err();
        assert!(matches!(err, KeyErrorKind::UnhashableArgument { name } if name == "b"));
    }

    #[test]
    fn test_nested_opaque_is_unhashable() {
        struct Handle;

        let nested = Value::from(vec![Value::from(1), Value::opaque(Handle)]);
        let err = key_for(&call_args![1, nested]).unwrap_err();
        assert!(matches!(err, KeyErrorKind::UnhashableArgument { name } if name == "b"));
    }
}
