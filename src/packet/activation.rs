use std::{
    collections::{HashMap, hash_map},
    fmt,
};

use crate::{
    packet::{defaults::DefaultActivation, error::PacketError},
    symbols::Symbol,
};

/// Activations keyed by construct symbol.
///
/// The packet `kind` records provenance (which sort of propagator produced
/// it) and is ignored by equality, as is the default strategy.
pub struct ActivationPacket<A = f64> {
    strengths: HashMap<Symbol, A>,
    defaults: DefaultActivation<A>,
    kind: Option<&'static str>,
}

impl<A> ActivationPacket<A> {
    pub fn new() -> Self {
        Self {
            strengths: HashMap::new(),
            defaults: DefaultActivation::none(),
            kind: None,
        }
    }

    pub fn with_defaults(mut self, defaults: DefaultActivation<A>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn kind(&self) -> Option<&'static str> {
        self.kind
    }

    pub fn defaults(&self) -> &DefaultActivation<A> {
        &self.defaults
    }

    pub fn default_activation(&self, key: &Symbol) -> Result<A, PacketError> {
        self.defaults.default_activation(key)
    }

    pub fn get(&self, key: &Symbol) -> Option<&A> {
        self.strengths.get(key)
    }

    pub fn contains_key(&self, key: &Symbol) -> bool {
        self.strengths.contains_key(key)
    }

    pub fn insert(&mut self, key: Symbol, value: A) -> Option<A> {
        self.strengths.insert(key, value)
    }

    pub fn remove(&mut self, key: &Symbol) -> Option<A> {
        self.strengths.remove(key)
    }

    /// Read `key`, filling and storing the default activation when absent.
    ///
    /// The stored default is visible to later reads and to `contains_key`
    /// on this packet only.
    pub fn get_or_default(&mut self, key: &Symbol) -> Result<&A, PacketError> {
        match self.strengths.entry(key.clone()) {
            hash_map::Entry::Occupied(entry) => Ok(entry.into_mut()),
            hash_map::Entry::Vacant(entry) => {
                let value = self.defaults.default_activation(key)?;
                Ok(entry.insert(value))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Symbol, A> {
        self.strengths.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, Symbol, A> {
        self.strengths.iter_mut()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, Symbol, A> {
        self.strengths.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, Symbol, A> {
        self.strengths.values()
    }

    /// Apply `f` to every stored value, keeping kind and default strategy.
    pub fn map_values(&self, mut f: impl FnMut(&Symbol, &A) -> A) -> Self {
        Self {
            strengths: self
                .strengths
                .iter()
                .map(|(key, value)| (key.clone(), f(key, value)))
                .collect(),
            defaults: self.defaults.clone(),
            kind: self.kind,
        }
    }

    pub fn into_inner(self) -> HashMap<Symbol, A> {
        self.strengths
    }
}

impl<A: Clone> ActivationPacket<A> {
    /// Read `key` without memoizing a default.
    pub fn resolve(&self, key: &Symbol) -> Result<A, PacketError> {
        match self.strengths.get(key) {
            Some(value) => Ok(value.clone()),
            None => self.defaults.default_activation(key),
        }
    }
}

impl<A> Default for ActivationPacket<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for ActivationPacket<A> {
    fn clone(&self) -> Self {
        Self {
            strengths: self.strengths.clone(),
            defaults: self.defaults.clone(),
            kind: self.kind,
        }
    }
}

impl<A: PartialEq> PartialEq for ActivationPacket<A> {
    fn eq(&self, other: &Self) -> bool {
        self.strengths == other.strengths
    }
}

impl<A> From<HashMap<Symbol, A>> for ActivationPacket<A> {
    fn from(strengths: HashMap<Symbol, A>) -> Self {
        Self {
            strengths,
            ..Self::new()
        }
    }
}

impl<A> FromIterator<(Symbol, A)> for ActivationPacket<A> {
    fn from_iter<I: IntoIterator<Item = (Symbol, A)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}

impl<A> Extend<(Symbol, A)> for ActivationPacket<A> {
    fn extend<I: IntoIterator<Item = (Symbol, A)>>(&mut self, iter: I) {
        self.strengths.extend(iter);
    }
}

impl<A> IntoIterator for ActivationPacket<A> {
    type Item = (Symbol, A);
    type IntoIter = hash_map::IntoIter<Symbol, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.strengths.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a ActivationPacket<A> {
    type Item = (&'a Symbol, &'a A);
    type IntoIter = hash_map::Iter<'a, Symbol, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.strengths.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for ActivationPacket<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.strengths.iter().collect();
        entries.sort_by(|(lhs, _), (rhs, _)| lhs.display_order(rhs));
        write!(f, "{}(", self.kind.unwrap_or("ActivationPacket"))?;
        f.debug_map().entries(entries).finish()?;
        f.write_str(")")
    }
}
