use clarion::{
    control::FilteringRelay,
    packet::{ActivationPacket, SelectorPacket},
    propagator::{
        Emission, Filtered, Gated, NoopPropagator, Propagator, Snapshot,
        testing::{ConstantPropagator, ThresholdSelector},
    },
    symbols::{ConstructRef, MatchSet, buffer, chunk, flow_tt, subsystem, terminus},
};

use crate::{approx, packet};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn given_public_types_when_checked_then_they_are_send_and_sync() {
    assert_send_sync::<clarion::symbols::Symbol>();
    assert_send_sync::<MatchSet>();
    assert_send_sync::<ActivationPacket<f64>>();
    assert_send_sync::<SelectorPacket<f64>>();
    assert_send_sync::<Snapshot>();
    assert_send_sync::<Gated<ConstantPropagator>>();
    assert_send_sync::<Filtered<ThresholdSelector>>();
    assert_send_sync::<FilteringRelay>();
    assert_send_sync::<Box<dyn Propagator<Output = ActivationPacket<f64>>>>();
}

#[test]
fn given_nested_gates_when_called_then_scales_multiply() {
    let client = flow_tt("assoc");
    let base = ConstantPropagator::new(client.clone(), [(chunk("x"), 1.0)]);
    let inner = Gated::new(base, buffer("g1"), "eye").expect("eye is built in");
    let outer = Gated::new(inner, buffer("g2"), "inv").expect("inv is built in");
    let inputs = Snapshot::new()
        .with(buffer("g1"), packet(&[(client.clone(), 0.5)]))
        .with(buffer("g2"), packet(&[(client, 0.2)]));

    assert!(outer.expects(&buffer("g1")));
    assert!(outer.expects(&buffer("g2")));
    let output = outer.call(&inputs).expect("both gates present");
    assert!(approx(output.get(&chunk("x")), 0.4), "{output:?}");
}

#[test]
fn given_decorated_propagator_when_entrusted_then_base_receives_address() {
    let base = ConstantPropagator::new(flow_tt("assoc"), []);
    let observer = base.clone();
    let mut gated = Gated::new(
        Gated::new(base, buffer("g1"), "eye").expect("eye is built in"),
        buffer("g2"),
        "eye",
    )
    .expect("eye is built in");

    let address = ConstructRef::from(vec![subsystem("nacs"), flow_tt("assoc")]);
    gated.entrust(&address);
    assert_eq!(observer.entrusted(), vec![address]);
}

#[test]
fn given_filtered_terminus_when_entrusted_then_base_receives_address() {
    let selector = ThresholdSelector::new(terminus("out"), MatchSet::new(), 0.0);
    let mut filtered = Filtered::new(selector, buffer("filter"), false);
    filtered.entrust(&ConstructRef::from(terminus("out")));
    assert_eq!(filtered.client(), &terminus("out"));
}

#[test]
fn given_boxed_propagators_when_emitting_then_outputs_are_wrapped() {
    let client = flow_tt("assoc");
    let propagators: Vec<Box<dyn Propagator<Output = ActivationPacket<f64>>>> = vec![
        Box::new(NoopPropagator::new(chunk("idle"))),
        Box::new(
            Gated::new(
                ConstantPropagator::new(client.clone(), [(chunk("x"), 0.8)]),
                buffer("gate"),
                "eye",
            )
            .expect("eye is built in"),
        ),
    ];
    let inputs = Snapshot::new().with(buffer("gate"), packet(&[(client, 1.0)]));

    let emitted: Vec<Emission> = propagators
        .iter()
        .map(|propagator| propagator.emit(&inputs).expect("inputs present"))
        .collect();
    assert_eq!(emitted[0], Emission::Activations(ActivationPacket::new()));
    assert!(approx(
        emitted[1].as_packet().and_then(|out| out.get(&chunk("x"))),
        0.8
    ));
    assert!(!propagators[0].expects(&buffer("gate")));
}

#[test]
fn given_call_when_finished_then_inputs_are_unchanged() {
    let client = flow_tt("assoc");
    let gated = Gated::new(
        ConstantPropagator::new(client.clone(), [(chunk("x"), 0.8)]),
        buffer("gate"),
        "inv",
    )
    .expect("inv is built in");
    let inputs = Snapshot::new().with(buffer("gate"), packet(&[(client, 0.3)]));
    let before = inputs.clone();

    gated.call(&inputs).expect("gate present");
    gated.call(&inputs).expect("gate present");
    assert_eq!(inputs, before);
}
