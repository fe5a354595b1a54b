use clarion::{
    packet::{ActivationPacket, SelectorPacket},
    symbols::chunk,
};

fn strengths() -> ActivationPacket<f64> {
    [(chunk(1), 0.78), (chunk(2), 0.24)].into_iter().collect()
}

#[test]
fn given_same_mapping_and_chosen_when_compared_then_selector_packets_are_equal() {
    let lhs = SelectorPacket::new(strengths(), [chunk(1)]);
    let rhs = SelectorPacket::new(strengths(), [chunk(1)]);
    assert_eq!(lhs, rhs);
}

#[test]
fn given_different_chosen_when_compared_then_selector_packets_differ() {
    let lhs = SelectorPacket::new(strengths(), [chunk(1)]);
    assert_ne!(lhs, SelectorPacket::new(strengths(), [chunk(2)]));
    assert_ne!(lhs, SelectorPacket::new(strengths(), [chunk(1), chunk(2)]));
}

#[test]
fn given_different_mapping_when_compared_then_selector_packets_differ() {
    let lhs = SelectorPacket::new(strengths(), [chunk(1)]);
    let mut changed = strengths();
    changed.insert(chunk(3), 0.1);
    assert_ne!(lhs, SelectorPacket::new(changed, [chunk(1)]));
}

#[test]
fn given_selector_packet_when_chosen_replaced_then_strengths_are_kept() {
    let mut packet = SelectorPacket::new(strengths(), [chunk(1)]);
    packet.set_chosen([chunk(2)]);
    assert!(packet.chosen().contains(&chunk(2)));
    assert_eq!(packet.strengths(), &strengths());
}
