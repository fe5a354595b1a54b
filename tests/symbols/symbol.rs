use clarion::symbols::{
    ConstructRef, ConstructType, Symbol, SymbolErrorKind, buffer, chunk, feature, flow_bt,
    subsystem, terminus,
};

#[test]
fn given_symbols_when_displayed_and_parsed_then_ctype_and_cid_round_trip() {
    let symbols = [
        feature("color", "red"),
        feature("size", 3),
        chunk("it's"),
        flow_bt("main"),
        terminus("choice"),
        Symbol::new(ConstructType::FEATURE | ConstructType::BUFFER, ["x", "y"])
            .expect("unnamed combination is valid"),
        Symbol::new("agent", Vec::<&str>::new()).expect("empty cid is valid"),
    ];

    for symbol in symbols {
        let text = symbol.to_string();
        let parsed: Symbol = text.parse().expect("display form should parse");
        assert_eq!(parsed, symbol, "round trip through {text}");
        assert_eq!(parsed.ctype(), symbol.ctype());
        assert_eq!(parsed.cid(), symbol.cid());
    }
}

#[test]
fn given_malformed_text_when_parsed_then_parse_error() {
    for text in ["chunk('a'", "widget('a')", "chunk(a)", "chunk('a') trailing"] {
        let err = text.parse::<Symbol>().expect_err(text);
        assert!(
            matches!(
                err.kind,
                SymbolErrorKind::Parse | SymbolErrorKind::UnknownConstructType
            ),
            "unexpected error for {text}: {err}"
        );
    }
}

#[test]
fn given_feature_with_single_component_when_constructed_then_type_error() {
    let err = Symbol::new("feature", ["color"]).expect_err("dim without val");
    assert_eq!(err.kind, SymbolErrorKind::TypeMismatch);

    let symbol = Symbol::new("feature", ["color", "red"]).expect("dim and val");
    assert_eq!(symbol.dim().expect("feature"), "color");
    assert_eq!(symbol.val().expect("feature"), "red");
}

#[test]
fn given_equal_ctype_and_cid_when_compared_then_symbols_are_equal() {
    let built = Symbol::new(ConstructType::CHUNK, ["apple"]).expect("valid");
    assert_eq!(built, chunk("apple"));
    assert_ne!(chunk("apple"), buffer("apple"));
    assert_ne!(chunk("apple"), chunk("pear"));
}

#[test]
fn given_symbol_when_serialized_then_text_form_is_used() {
    let json = serde_json::to_value(feature("color", "red")).expect("serializable");
    assert_eq!(json, serde_json::json!("feature('color', 'red')"));

    let from_text: Symbol = serde_json::from_value(json).expect("text form");
    let from_parts: Symbol = serde_json::from_value(serde_json::json!({
        "ctype": "feature",
        "cid": ["color", "red"]
    }))
    .expect("structured form");
    assert_eq!(from_text, from_parts);

    let invalid = serde_json::from_value::<Symbol>(serde_json::json!({
        "ctype": "feature",
        "cid": ["color"]
    }));
    assert!(invalid.is_err());
}

#[test]
fn given_nested_address_when_joined_then_leaf_and_root_follow_path() {
    let address = ConstructRef::from(subsystem("nacs")).join(terminus("out"));
    assert_eq!(address.depth(), 2);
    assert_eq!(address.root(), Some(&subsystem("nacs")));
    assert_eq!(address.leaf(), Some(&terminus("out")));
    assert_eq!(address.to_string(), "subsystem('nacs') / terminus('out')");
}
