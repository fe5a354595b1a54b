use clarion::{
    packet::SelectorPacket,
    propagator::{Filtered, Propagator, PropagatorErrorKind, Snapshot, testing::ThresholdSelector},
    symbols::{MatchSet, buffer, chunk, flow_tt, subsystem, terminus},
};

use crate::{approx, packet};

fn selector() -> ThresholdSelector {
    ThresholdSelector::new(
        terminus("out"),
        MatchSet::new().with_constructs([flow_tt("declared"), flow_tt("undeclared")]),
        0.6,
    )
}

#[test]
fn given_inverted_filter_when_called_then_weighted_source_scaled_and_other_passes_through() {
    let filtered = Filtered::new(selector(), buffer("filter"), true);
    let inputs = Snapshot::new()
        .with(buffer("filter"), packet(&[(flow_tt("declared"), 0.25)]))
        .with(flow_tt("declared"), packet(&[(chunk("a"), 1.0)]))
        .with(flow_tt("undeclared"), packet(&[(chunk("b"), 0.8)]));

    let selection = filtered.call(&inputs).expect("filter present");
    assert!(approx(selection.get(&chunk("a")), 0.75), "{selection:?}");
    assert!(approx(selection.get(&chunk("b")), 0.8), "{selection:?}");
    assert!(selection.chosen().contains(&chunk("a")));
    assert!(selection.chosen().contains(&chunk("b")));
}

#[test]
fn given_uninverted_filter_when_called_then_unmentioned_source_is_suppressed() {
    let filtered = Filtered::new(selector(), buffer("filter"), false);
    let inputs = Snapshot::new()
        .with(buffer("filter"), packet(&[(flow_tt("declared"), 0.25)]))
        .with(flow_tt("declared"), packet(&[(chunk("a"), 1.0)]))
        .with(flow_tt("undeclared"), packet(&[(chunk("b"), 0.8)]));

    let selection = filtered.call(&inputs).expect("filter present");
    assert!(approx(selection.get(&chunk("a")), 0.25));
    assert!(approx(selection.get(&chunk("b")), 0.0));
    assert!(selection.chosen().is_empty());
}

#[test]
fn given_element_weight_when_filtering_then_it_overrides_source_weight() {
    let filtered = Filtered::new(selector(), buffer("filter"), false);
    let inputs = Snapshot::new()
        .with(
            buffer("filter"),
            packet(&[(flow_tt("declared"), 1.0), (chunk("a"), 0.5)]),
        )
        .with(flow_tt("declared"), packet(&[(chunk("a"), 1.0), (chunk("c"), 1.0)]));

    let selection = filtered.call(&inputs).expect("filter present");
    assert!(approx(selection.get(&chunk("a")), 0.5));
    assert!(approx(selection.get(&chunk("c")), 1.0));
}

#[test]
fn given_selection_and_container_sources_when_filtering_then_chosen_and_members_survive() {
    let base = ThresholdSelector::new(
        terminus("out"),
        MatchSet::new().with_constructs([terminus("upstream"), subsystem("ms")]),
        0.0,
    );
    let filtered = Filtered::new(base, buffer("filter"), true);
    let upstream = SelectorPacket::new(packet(&[(chunk("a"), 1.0)]), [chunk("a")]);
    let members = Snapshot::new().with(terminus("cmds"), packet(&[(chunk("z"), 1.0)]));
    let inputs = Snapshot::new()
        .with(buffer("filter"), packet(&[(terminus("upstream"), 0.5)]))
        .with(terminus("upstream"), upstream)
        .with(subsystem("ms"), members);

    let selection = filtered.call(&inputs).expect("filter present");
    assert!(approx(selection.get(&chunk("a")), 0.5));
    assert!(!selection.contains_key(&chunk("z")));
}

#[test]
fn given_absent_filter_when_called_then_missing_input() {
    let filtered = Filtered::new(selector(), buffer("filter"), true);
    let inputs = Snapshot::new().with(flow_tt("declared"), packet(&[(chunk("a"), 1.0)]));

    let err = filtered.call(&inputs).expect_err("filter absent");
    assert_eq!(err.kind, PropagatorErrorKind::MissingInput);
}
