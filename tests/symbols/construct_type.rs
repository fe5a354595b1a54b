use clarion::symbols::{ConstructType, IntoConstructType, SymbolErrorKind};

#[test]
fn given_derived_union_when_compared_then_equals_or_of_members() {
    assert_eq!(
        ConstructType::NODE,
        ConstructType::FEATURE | ConstructType::CHUNK
    );
    assert_eq!(
        ConstructType::FLOW,
        ConstructType::FLOW_TB
            | ConstructType::FLOW_BT
            | ConstructType::FLOW_TT
            | ConstructType::FLOW_BB
            | ConstructType::FLOW_IN
    );
    assert_eq!(
        ConstructType::CONTAINER_CONSTRUCT,
        ConstructType::SUBSYSTEM | ConstructType::AGENT
    );
}

#[test]
fn given_name_or_bits_when_converted_then_same_construct_type() {
    let by_name = "flow_tt".into_construct_type().expect("declared name");
    let by_bits = (1u32 << 5).into_construct_type().expect("valid bits");
    let by_json = (&serde_json::json!("flow_tt"))
        .into_construct_type()
        .expect("json string is a name");
    assert_eq!(by_name, ConstructType::FLOW_TT);
    assert_eq!(by_bits, ConstructType::FLOW_TT);
    assert_eq!(by_json, ConstructType::FLOW_TT);
    assert_eq!(
        ConstructType::FLOW_TT.into_construct_type(),
        Ok(ConstructType::FLOW_TT)
    );
}

#[test]
fn given_unsupported_input_when_converted_then_type_or_lookup_error() {
    let err = (&serde_json::json!(true))
        .into_construct_type()
        .expect_err("booleans are not construct types");
    assert_eq!(err.kind, SymbolErrorKind::TypeMismatch);

    let err = "widget".into_construct_type().expect_err("unknown name");
    assert_eq!(err.kind, SymbolErrorKind::UnknownConstructType);

    let err = (1u32 << 20)
        .into_construct_type()
        .expect_err("undeclared bit");
    assert_eq!(err.kind, SymbolErrorKind::UnknownConstructType);
}

#[test]
fn given_mask_when_testing_membership_then_any_shared_bit_matches() {
    assert!(ConstructType::FLOW_TT.is_in(ConstructType::FLOW_H));
    assert!(ConstructType::FLOW_TT.is_in(ConstructType::FLOW_XT));
    assert!(!ConstructType::FLOW_TT.is_in(ConstructType::FLOW_V));
    assert!(!ConstructType::CHUNK.is_in(ConstructType::NULL_CONSTRUCT));
    assert!(ConstructType::NULL_CONSTRUCT.is_in(ConstructType::NULL_CONSTRUCT));
}
