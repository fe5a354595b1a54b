use clarion::{
    packet::{ActivationPacket, DefaultActivation, PacketErrorKind},
    symbols::{ConstructType, chunk, feature, flow_tt},
};

#[test]
fn given_zero_default_when_reading_unset_key_then_zero_is_stored() {
    let mut packet = ActivationPacket::<f64>::new().with_defaults(DefaultActivation::constant(0.0));
    let key = chunk("apple");

    assert_eq!(packet.get_or_default(&key).copied(), Ok(0.0));
    assert!(packet.contains_key(&key));
    assert_eq!(packet.get(&key), Some(&0.0));
    assert_eq!(packet.len(), 1);
}

#[test]
fn given_memoized_default_when_other_packet_read_then_it_stays_unaffected() {
    let template =
        ActivationPacket::<f64>::new().with_defaults(DefaultActivation::constant(0.25));
    let mut first = template.clone();
    let second = template.clone();

    first.get_or_default(&chunk("x")).expect("default available");
    assert!(first.contains_key(&chunk("x")));
    assert!(!second.contains_key(&chunk("x")));
    assert!(!template.contains_key(&chunk("x")));
}

#[test]
fn given_base_strategy_when_reading_unset_key_then_missing_key_error() {
    let mut packet: ActivationPacket<f64> = [(chunk("a"), 0.4)].into_iter().collect();
    assert_eq!(packet.get_or_default(&chunk("a")).copied(), Ok(0.4));

    let err = packet
        .get_or_default(&chunk("b"))
        .expect_err("no default strategy");
    assert_eq!(err.kind, PacketErrorKind::MissingKey);
    assert!(!packet.contains_key(&chunk("b")));
}

#[test]
fn given_ctype_strategy_when_resolving_then_default_varies_by_category() {
    let packet = ActivationPacket::<f64>::new().with_defaults(DefaultActivation::by_ctype(
        vec![(ConstructType::FEATURE, 1.0), (ConstructType::FLOW, 0.5)],
        Some(0.0),
    ));

    assert_eq!(packet.resolve(&feature("color", "red")), Ok(1.0));
    assert_eq!(packet.resolve(&flow_tt("assoc")), Ok(0.5));
    assert_eq!(packet.resolve(&chunk("apple")), Ok(0.0));
    assert!(packet.is_empty(), "resolve never stores defaults");
}

#[test]
fn given_initial_mapping_when_constructed_then_values_are_copied_unvalidated() {
    let source = std::collections::HashMap::from([(chunk("a"), -3.0), (chunk("b"), 7.5)]);
    let packet = ActivationPacket::from(source.clone());
    assert_eq!(packet.get(&chunk("a")), Some(&-3.0));
    assert_eq!(packet.into_inner(), source);
}
