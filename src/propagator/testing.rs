use std::sync::{Arc, Mutex};

use crate::{
    packet::{ActivationPacket, SelectorPacket},
    propagator::{error::PropagatorError, ports::Propagator, snapshot::Snapshot},
    symbols::{ConstructRef, MatchSet, Symbol},
};

/// Emits a fixed packet. Optionally reads inputs it never declares, which
/// lets tests observe what a decorator exposes to its base.
#[derive(Debug, Clone)]
pub struct ConstantPropagator {
    client: Symbol,
    output: ActivationPacket<f64>,
    expected: MatchSet,
    required: Vec<Symbol>,
    entrusted: Arc<Mutex<Vec<ConstructRef>>>,
}

impl ConstantPropagator {
    pub fn new(client: Symbol, output: impl IntoIterator<Item = (Symbol, f64)>) -> Self {
        Self {
            client,
            output: output.into_iter().collect(),
            expected: MatchSet::new(),
            required: Vec::new(),
            entrusted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn expecting(mut self, constructs: impl IntoIterator<Item = Symbol>) -> Self {
        self.expected = self.expected.with_constructs(constructs);
        self
    }

    pub fn requiring(mut self, sources: impl IntoIterator<Item = Symbol>) -> Self {
        self.required.extend(sources);
        self
    }

    /// Addresses passed to `entrust`, shared with every clone.
    pub fn entrusted(&self) -> Vec<ConstructRef> {
        self.entrusted.lock().expect("lock poisoned").clone()
    }
}

impl Propagator for ConstantPropagator {
    type Output = ActivationPacket<f64>;

    fn client(&self) -> &Symbol {
        &self.client
    }

    fn expects(&self, construct: &Symbol) -> bool {
        self.expected.contains(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        for source in &self.required {
            inputs.require(source)?;
        }
        Ok(self.output.clone())
    }

    fn entrust(&mut self, path: &ConstructRef) {
        self.entrusted
            .lock()
            .expect("lock poisoned")
            .push(path.clone());
    }
}

/// Sums the strengths of every expected source, element-wise.
#[derive(Debug, Clone)]
pub struct PassThrough {
    client: Symbol,
    sources: MatchSet,
}

impl PassThrough {
    pub fn new(client: Symbol, sources: MatchSet) -> Self {
        Self { client, sources }
    }
}

impl Propagator for PassThrough {
    type Output = ActivationPacket<f64>;

    fn client(&self) -> &Symbol {
        &self.client
    }

    fn expects(&self, construct: &Symbol) -> bool {
        self.sources.contains(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        Ok(sum_sources(&self.sources, inputs).with_kind("pass_through"))
    }
}

/// Terminus that chooses every node whose summed strength exceeds a
/// threshold.
#[derive(Debug, Clone)]
pub struct ThresholdSelector {
    client: Symbol,
    sources: MatchSet,
    threshold: f64,
}

impl ThresholdSelector {
    pub fn new(client: Symbol, sources: MatchSet, threshold: f64) -> Self {
        Self {
            client,
            sources,
            threshold,
        }
    }
}

impl Propagator for ThresholdSelector {
    type Output = SelectorPacket<f64>;

    fn client(&self) -> &Symbol {
        &self.client
    }

    fn expects(&self, construct: &Symbol) -> bool {
        self.sources.contains(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        let strengths = sum_sources(&self.sources, inputs).with_kind("selection");
        let chosen: Vec<Symbol> = strengths
            .iter()
            .filter(|(_, strength)| **strength > self.threshold)
            .map(|(node, _)| node.clone())
            .collect();
        Ok(SelectorPacket::new(strengths, chosen))
    }
}

fn sum_sources(sources: &MatchSet, inputs: &Snapshot) -> ActivationPacket<f64> {
    let mut total = ActivationPacket::new();
    for (_, emission) in inputs.iter().filter(|(source, _)| sources.contains(source)) {
        let Some(packet) = emission.as_packet() else {
            continue;
        };
        for (node, strength) in packet {
            match total.get(node).copied() {
                Some(current) => total.insert(node.clone(), current + strength),
                None => total.insert(node.clone(), *strength),
            };
        }
    }
    total
}
