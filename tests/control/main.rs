
use std::collections::BTreeMap;

use clarion::{
    control::{Controller, FilteringRelay, RelayInterface, RelayTarget},
    packet::SelectorPacket,
    propagator::Snapshot,
    symbols::{CidPart, Symbol, buffer, subsystem, terminus},
};

pub fn controller() -> Controller {
    Controller::new(subsystem("ms"), terminus("cmds")).expect("valid controller")
}

pub fn build_relay(mapping: Vec<(&str, RelayTarget)>) -> FilteringRelay {
    build_relay_for(buffer("relay"), mapping)
}

pub fn build_relay_for(client: Symbol, mapping: Vec<(&str, RelayTarget)>) -> FilteringRelay {
    let mapping: BTreeMap<CidPart, RelayTarget> = mapping
        .into_iter()
        .map(|(tag, target)| (CidPart::from(tag), target))
        .collect();
    let interface = RelayInterface::new(mapping, vec!["off".into(), "low".into(), "high".into()])
        .expect("three distinct vals");
    FilteringRelay::new(client, controller(), interface)
}

/// Snapshot in which the controller terminus chose `commands` for the
/// relay built by `build_relay`.
pub fn commanding(commands: &[Symbol]) -> Snapshot {
    addressing(&[(buffer("relay"), commands)])
}

/// Snapshot in which the controller terminus addressed each client its own
/// chosen commands.
pub fn addressing(commands: &[(Symbol, &[Symbol])]) -> Snapshot {
    let addressed = commands
        .iter()
        .fold(Snapshot::new(), |addressed, (client, chosen)| {
            let selection = SelectorPacket::new(
                chosen.iter().map(|cmd| (cmd.clone(), 1.0)).collect(),
                chosen.iter().cloned(),
            );
            addressed.with(client.clone(), selection)
        });
    Snapshot::new().with(
        subsystem("ms"),
        Snapshot::new().with(terminus("cmds"), addressed),
    )
}
