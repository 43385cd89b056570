use multiton::{
    CallArguments, ClassSpec, ConstructionGate, DefinitionErrorKind, InstantiateErrorKind, ParameterKind, ParameterSpec, Signature,
    SignatureErrorKind,
};

struct Widget;

fn widget_spec() -> ClassSpec {
    let signature = Signature::builder()
        .receiver("self")
        .positional_or_keyword("a")
        .build()
        .unwrap();
    ClassSpec::new("Widget").callable("init", signature, |_: CallArguments| Ok::<_, InstantiateErrorKind>(Widget))
}

#[test]
fn test_register() {
    let gate = ConstructionGate::new();
    let class_1 = gate.register(widget_spec().bind_target("init")).unwrap();
    let class_2 = gate.register(widget_spec().bind_target("init")).unwrap();

    assert_ne!(class_1, class_2);
}

#[test]
fn test_missing_configuration() {
    let gate = ConstructionGate::new();

    let err = gate.register(widget_spec()).unwrap_err();
    assert!(matches!(err, DefinitionErrorKind::MissingConfiguration { class } if class == "Widget"));
}

#[test]
fn test_invalid_bind_target() {
    let gate = ConstructionGate::new();

    let err = gate.register(widget_spec().bind_target("does_not_exist")).unwrap_err();
    assert!(matches!(
        err,
        DefinitionErrorKind::InvalidBindTarget { class, target } if class == "Widget" && target == "does_not_exist"
    ));
}

#[test]
fn test_unknown_parent() {
    let gate = ConstructionGate::new();
    let class = gate.register(widget_spec().bind_target("init")).unwrap();

    let foreign_gate = ConstructionGate::new();
    let err = foreign_gate
        .register(ClassSpec::new("SubWidget").child_of(class).bind_target("init"))
        .unwrap_err();
    assert!(matches!(err, DefinitionErrorKind::UnknownParent { class } if class == "SubWidget"));
}

#[test]
fn test_subclass_must_declare_own_bind_target() {
    let gate = ConstructionGate::new();
    let parent = gate.register(widget_spec().bind_target("init")).unwrap();

    let err = gate.register(ClassSpec::new("SubWidget").child_of(parent)).unwrap_err();
    assert!(matches!(err, DefinitionErrorKind::MissingConfiguration { class } if class == "SubWidget"));
}

#[test]
fn test_subclass_may_bind_inherited_callable() {
    let gate = ConstructionGate::new();
    let parent = gate.register(widget_spec().bind_target("init")).unwrap();

    let child = gate.register(ClassSpec::new("SubWidget").child_of(parent).bind_target("init"));
    assert!(child.is_ok());
}

#[test]
fn test_signature_validation() {
    let err = Signature::builder().positional_only("a").positional_only("a").build().unwrap_err();
    assert!(matches!(err, SignatureErrorKind::DuplicateParameter { name } if name == "a"));

    let err = Signature::builder()
        .keyword_only("a")
        .parameter(ParameterSpec::new("b", ParameterKind::PositionalOrKeyword))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SignatureErrorKind::KindOrder {
            name,
            kind: ParameterKind::PositionalOrKeyword,
            previous: ParameterKind::KeywordOnly,
        } if name == "b"
    ));
}
