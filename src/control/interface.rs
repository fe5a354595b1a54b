use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    control::{
        commands::CommandData,
        error::{ControlError, invalid_command, invalid_interface},
    },
    symbols::{CidPart, Symbol, feature},
};

/// Parsed commands: one value per dimension.
pub type Commands = BTreeMap<CidPart, CidPart>;

/// Feature-coded command vocabulary of a controlled construct.
///
/// `features` and `defaults` are fixed when the interface is built.
pub trait FeatureInterface: Send + Sync {
    fn dims(&self) -> &[CidPart];

    fn features(&self) -> &HashSet<Symbol>;

    fn defaults(&self) -> &HashSet<Symbol>;

    /// Resolves exactly one command value for every dimension.
    ///
    /// Features outside the vocabulary are ignored. A dimension with no
    /// command takes its default feature; a dimension with more than one
    /// distinct value is rejected.
    fn parse_commands(&self, data: &CommandData) -> Result<Commands, ControlError> {
        let given = group_by_dims(data.iter().filter(|cmd| self.features().contains(*cmd)));
        let defaults = group_by_dims(self.defaults());

        let mut commands = Commands::new();
        for dim in self.dims() {
            let vals = given.get(dim).or_else(|| defaults.get(dim));
            let Some(vals) = vals else {
                tracing::warn!(target: "control", dim = %dim, "command_dimension_without_default");
                return Err(invalid_command(format!(
                    "no command and no default for dimension {dim}"
                )));
            };

            let mut iter = vals.iter();
            match (iter.next(), iter.next()) {
                (Some(val), None) => {
                    commands.insert(dim.clone(), val.clone());
                }
                _ => {
                    tracing::warn!(
                        target: "control",
                        dim = %dim,
                        count = vals.len(),
                        "conflicting_commands_rejected"
                    );
                    return Err(invalid_command(format!(
                        "expected one command for dimension {dim}, got {}",
                        vals.len()
                    )));
                }
            }
        }
        Ok(commands)
    }
}

/// Groups feature symbols by dimension. Non-feature symbols are skipped.
pub fn group_by_dims<'a>(
    features: impl IntoIterator<Item = &'a Symbol>,
) -> BTreeMap<CidPart, BTreeSet<CidPart>> {
    let mut groups: BTreeMap<CidPart, BTreeSet<CidPart>> = BTreeMap::new();
    for symbol in features {
        if let (Ok(dim), Ok(val)) = (symbol.dim(), symbol.val()) {
            groups.entry(dim.clone()).or_default().insert(val.clone());
        }
    }
    groups
}

/// Client or group of clients receiving the weight of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayTarget {
    Single(Symbol),
    Group(HashSet<Symbol>),
}

impl RelayTarget {
    pub fn clients(&self) -> Box<dyn Iterator<Item = &Symbol> + '_> {
        match self {
            RelayTarget::Single(client) => Box::new(std::iter::once(client)),
            RelayTarget::Group(clients) => Box::new(clients.iter()),
        }
    }
}

impl From<Symbol> for RelayTarget {
    fn from(client: Symbol) -> Self {
        RelayTarget::Single(client)
    }
}

impl From<HashSet<Symbol>> for RelayTarget {
    fn from(clients: HashSet<Symbol>) -> Self {
        RelayTarget::Group(clients)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRelayInterface {
    mapping: BTreeMap<CidPart, RelayTarget>,
    vals: Vec<CidPart>,
}

/// Command interface of a filtering relay.
///
/// Maps controller dimension tags to clients. The i-th entry of `vals`
/// stands for a weight of `i / (len(vals) - 1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawRelayInterface", into = "RawRelayInterface")]
pub struct RelayInterface {
    mapping: BTreeMap<CidPart, RelayTarget>,
    vals: Vec<CidPart>,
    dims: Vec<CidPart>,
    features: HashSet<Symbol>,
    defaults: HashSet<Symbol>,
}

impl RelayInterface {
    pub fn new(
        mapping: BTreeMap<CidPart, RelayTarget>,
        vals: Vec<CidPart>,
    ) -> Result<Self, ControlError> {
        let distinct: HashSet<&CidPart> = vals.iter().collect();
        if distinct.len() < 2 {
            return Err(invalid_interface(format!(
                "vals must define at least 2 distinct values, got {}",
                distinct.len()
            )));
        }

        let features = mapping
            .keys()
            .flat_map(|tag| vals.iter().map(move |val| feature(tag.clone(), val.clone())))
            .collect();
        let defaults = mapping
            .keys()
            .map(|tag| feature(tag.clone(), vals[0].clone()))
            .collect();
        let dims = mapping.keys().cloned().collect();

        Ok(Self {
            mapping,
            vals,
            dims,
            features,
            defaults,
        })
    }

    pub fn mapping(&self) -> &BTreeMap<CidPart, RelayTarget> {
        &self.mapping
    }

    pub fn vals(&self) -> &[CidPart] {
        &self.vals
    }

    pub fn target(&self, tag: &CidPart) -> Option<&RelayTarget> {
        self.mapping.get(tag)
    }

    /// Weight level encoded by `val`, or `None` outside the vocabulary.
    pub fn strength_of(&self, val: &CidPart) -> Option<f64> {
        let index = self.vals.iter().position(|candidate| candidate == val)?;
        Some(index as f64 / (self.vals.len() - 1) as f64)
    }
}

impl FeatureInterface for RelayInterface {
    fn dims(&self) -> &[CidPart] {
        &self.dims
    }

    fn features(&self) -> &HashSet<Symbol> {
        &self.features
    }

    fn defaults(&self) -> &HashSet<Symbol> {
        &self.defaults
    }
}

impl TryFrom<RawRelayInterface> for RelayInterface {
    type Error = ControlError;

    /// Serialized mapping keys are always strings, so a numeric-looking key
    /// would never match an integer command dimension.
    fn try_from(raw: RawRelayInterface) -> Result<Self, Self::Error> {
        if let Some(tag) = raw
            .mapping
            .keys()
            .filter_map(CidPart::as_str)
            .find(|tag| tag.parse::<i64>().is_ok())
        {
            return Err(invalid_interface(format!(
                "mapping tag '{tag}' looks numeric; serialized tags are strings and \
                 cannot address integer command dimensions"
            )));
        }
        Self::new(raw.mapping, raw.vals)
    }
}

impl From<RelayInterface> for RawRelayInterface {
    fn from(interface: RelayInterface) -> Self {
        Self {
            mapping: interface.mapping,
            vals: interface.vals,
        }
    }
}
