use alloc::collections::BTreeMap;

use crate::{
    arguments::{BoundArguments, CallArguments},
    errors::{BindErrorKind, UnexpectedArgument},
    signature::{ParameterKind, Signature},
};

/// Binds call arguments against a signature.
///
/// Positional values fill non-keyword-only parameters in declaration order,
/// keyword values fill by name, remaining parameters take their declared
/// defaults. The receiver never binds. Pure; no variadic support.
///
/// # Errors
/// - Returns [`BindErrorKind::UnexpectedArgument`] on positional overflow, on a
///   keyword with no matching parameter and on a keyword naming a
///   positional-only parameter
/// - Returns [`BindErrorKind::DuplicateArgument`] if a parameter is filled both
///   positionally and by keyword
/// - Returns [`BindErrorKind::MissingArgument`] if a parameter without default
///   stays unfilled
pub(crate) fn bind(signature: &Signature, arguments: &CallArguments) -> Result<BoundArguments, BindErrorKind> {
    let positional_capacity = signature.positional_capacity();
    if arguments.positional.len() > positional_capacity {
        return Err(UnexpectedArgument::Positional {
            expected: positional_capacity,
            given: arguments.positional.len(),
        }
        .into());
    }

    let mut bound = BTreeMap::new();

    // Kind order invariant puts the positionally fillable parameters first
    for (parameter, value) in signature.parameters().iter().zip(&arguments.positional) {
        bound.insert(parameter.name.clone(), value.clone());
    }

    for (name, value) in &arguments.keyword {
        let Some(parameter) = signature.get(name) else {
            return Err(UnexpectedArgument::Keyword { name: name.clone() }.into());
        };
        if parameter.kind == ParameterKind::PositionalOnly {
            return Err(UnexpectedArgument::Keyword { name: name.clone() }.into());
        }
        if bound.contains_key(name) {
            return Err(BindErrorKind::DuplicateArgument { name: name.clone() });
        }
        bound.insert(name.clone(), value.clone());
    }

    for parameter in signature.parameters() {
        if bound.contains_key(&parameter.name) {
            continue;
        }
        match &parameter.default {
            Some(value) => {
                bound.insert(parameter.name.clone(), value.clone());
            }
            None => {
                return Err(BindErrorKind::MissingArgument {
                    name: parameter.name.clone(),
                })
            }
        }
    }

    Ok(BoundArguments(bound))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::bind;
    use crate::{
        errors::{BindErrorKind, UnexpectedArgument},
        signature::{ParameterKind, ParameterSpec, Signature},
        value::Value,
    };

    fn signature() -> Signature {
        Signature::builder()
            .receiver("self")
            .positional_only("a")
            .positional_or_keyword("b")
            .parameter(ParameterSpec::new("c", ParameterKind::KeywordOnly).with_default(0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_positional_assignment_in_declaration_order() {
        let bound = bind(&signature(), &call_args![1, "test"]).unwrap();

        assert_eq!(bound.get("a"), Some(&Value::from(1)));
        assert_eq!(bound.get("b"), Some(&Value::from("test")));
        assert_eq!(bound.get("c"), Some(&Value::from(0)));
        assert_eq!(bound.len(), 3);
    }

    #[test]
    fn test_keyword_assignment() {
        let bound = bind(&signature(), &call_args![1; b = "test", c = 2]).unwrap();

        assert_eq!(bound.get("b"), Some(&Value::from("test")));
        assert_eq!(bound.get("c"), Some(&Value::from(2)));
    }

    #[test]
    fn test_call_shapes_bind_equal() {
        let positional = bind(&signature(), &call_args![1, "test"]).unwrap();
        let keyword = bind(&signature(), &call_args![1; b = "test", c = 0]).unwrap();

        assert_eq!(positional, keyword);
    }

    #[test]
    fn test_missing_argument() {
        let err = bind(&signature(), &call_args![1]).unwrap_err();
        assert!(matches!(err, BindErrorKind::MissingArgument { name } if name == "b"));
    }

    #[test]
    fn test_duplicate_argument() {
        let err = bind(&signature(), &call_args![1, "test"; b = "again"]).unwrap_err();
        assert!(matches!(err, BindErrorKind::DuplicateArgument { name } if name == "b"));
    }

    #[test]
    fn test_unexpected_keyword() {
        let err = bind(&signature(), &call_args![1, "test"; nope = 1]).unwrap_err();
        assert!(matches!(
            err,
            BindErrorKind::UnexpectedArgument(UnexpectedArgument::Keyword { name }) if name == "nope"
        ));
    }

    #[test]
    fn test_positional_only_refused_by_keyword() {
        let err = bind(&signature(), &call_args![; a = 1, b = 2]).unwrap_err();
        assert!(matches!(
            err,
            BindErrorKind::UnexpectedArgument(UnexpectedArgument::Keyword { name }) if name == "a"
        ));
    }

    #[test]
    fn test_positional_overflow() {
        let err = bind(&signature(), &call_args![1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            BindErrorKind::UnexpectedArgument(UnexpectedArgument::Positional { expected: 2, given: 3 })
        ));
    }
}
