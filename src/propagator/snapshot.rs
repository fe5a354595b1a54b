use std::collections::{HashMap, hash_map};

use crate::{
    packet::{ActivationPacket, SelectorPacket},
    propagator::error::{PropagatorError, missing_input, type_mismatch},
    symbols::Symbol,
};

/// Output of one construct as seen by downstream propagators.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Activations(ActivationPacket<f64>),
    Selection(SelectorPacket<f64>),
    /// Outputs of the members of a container construct, keyed by member.
    Container(Snapshot),
}

impl Emission {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Emission::Activations(_) => "activations",
            Emission::Selection(_) => "selection",
            Emission::Container(_) => "container",
        }
    }

    /// Strengths carried by this emission; selections expose their strengths.
    pub fn as_packet(&self) -> Option<&ActivationPacket<f64>> {
        match self {
            Emission::Activations(packet) => Some(packet),
            Emission::Selection(selection) => Some(selection.strengths()),
            Emission::Container(_) => None,
        }
    }

    pub fn as_selection(&self) -> Option<&SelectorPacket<f64>> {
        match self {
            Emission::Selection(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Snapshot> {
        match self {
            Emission::Container(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl From<ActivationPacket<f64>> for Emission {
    fn from(packet: ActivationPacket<f64>) -> Self {
        Emission::Activations(packet)
    }
}

impl From<SelectorPacket<f64>> for Emission {
    fn from(selection: SelectorPacket<f64>) -> Self {
        Emission::Selection(selection)
    }
}

impl From<Snapshot> for Emission {
    fn from(snapshot: Snapshot) -> Self {
        Emission::Container(snapshot)
    }
}

/// Read-only activation view offered to a propagator for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: HashMap<Symbol, Emission>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: Symbol, emission: impl Into<Emission>) -> Self {
        self.insert(source, emission);
        self
    }

    pub fn insert(&mut self, source: Symbol, emission: impl Into<Emission>) -> Option<Emission> {
        self.entries.insert(source, emission.into())
    }

    pub fn get(&self, source: &Symbol) -> Option<&Emission> {
        self.entries.get(source)
    }

    pub fn contains(&self, source: &Symbol) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Symbol, Emission> {
        self.entries.iter()
    }

    pub fn sources(&self) -> hash_map::Keys<'_, Symbol, Emission> {
        self.entries.keys()
    }

    pub fn require(&self, source: &Symbol) -> Result<&Emission, PropagatorError> {
        self.entries
            .get(source)
            .ok_or_else(|| missing_input(format!("no input from {source}")))
    }

    pub fn packet(&self, source: &Symbol) -> Result<&ActivationPacket<f64>, PropagatorError> {
        let emission = self.require(source)?;
        emission.as_packet().ok_or_else(|| {
            type_mismatch(format!(
                "expected activations from {source}, found {}",
                emission.variant_name()
            ))
        })
    }

    pub fn selection(&self, source: &Symbol) -> Result<&SelectorPacket<f64>, PropagatorError> {
        let emission = self.require(source)?;
        emission.as_selection().ok_or_else(|| {
            type_mismatch(format!(
                "expected a selection from {source}, found {}",
                emission.variant_name()
            ))
        })
    }

    pub fn container(&self, source: &Symbol) -> Result<&Snapshot, PropagatorError> {
        let emission = self.require(source)?;
        emission.as_container().ok_or_else(|| {
            type_mismatch(format!(
                "expected container outputs from {source}, found {}",
                emission.variant_name()
            ))
        })
    }

    /// Copy of the entries whose source satisfies `keep`.
    pub fn restrict(&self, mut keep: impl FnMut(&Symbol) -> bool) -> Snapshot {
        self.entries
            .iter()
            .filter(|(source, _)| keep(source))
            .map(|(source, emission)| (source.clone(), emission.clone()))
            .collect()
    }
}

impl FromIterator<(Symbol, Emission)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Symbol, Emission)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a Symbol, &'a Emission);
    type IntoIter = hash_map::Iter<'a, Symbol, Emission>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
