use std::{
    collections::HashSet,
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{packet::activation::ActivationPacket, symbols::Symbol};

/// Result of an action selection routine.
///
/// Holds the strengths of actionable constructs plus the set chosen for
/// execution this cycle.
pub struct SelectorPacket<A = f64> {
    strengths: ActivationPacket<A>,
    chosen: HashSet<Symbol>,
}

impl<A> SelectorPacket<A> {
    pub fn new(strengths: ActivationPacket<A>, chosen: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            strengths,
            chosen: chosen.into_iter().collect(),
        }
    }

    pub fn chosen(&self) -> &HashSet<Symbol> {
        &self.chosen
    }

    pub fn set_chosen(&mut self, chosen: impl IntoIterator<Item = Symbol>) {
        self.chosen = chosen.into_iter().collect();
    }

    pub fn strengths(&self) -> &ActivationPacket<A> {
        &self.strengths
    }

    pub fn into_parts(self) -> (ActivationPacket<A>, HashSet<Symbol>) {
        (self.strengths, self.chosen)
    }
}

impl<A> Default for SelectorPacket<A> {
    fn default() -> Self {
        Self {
            strengths: ActivationPacket::new(),
            chosen: HashSet::new(),
        }
    }
}

impl<A> Deref for SelectorPacket<A> {
    type Target = ActivationPacket<A>;

    fn deref(&self) -> &Self::Target {
        &self.strengths
    }
}

impl<A> DerefMut for SelectorPacket<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.strengths
    }
}

impl<A: Clone> Clone for SelectorPacket<A> {
    fn clone(&self) -> Self {
        Self {
            strengths: self.strengths.clone(),
            chosen: self.chosen.clone(),
        }
    }
}

impl<A: PartialEq> PartialEq for SelectorPacket<A> {
    fn eq(&self, other: &Self) -> bool {
        self.strengths == other.strengths && self.chosen == other.chosen
    }
}

impl<A: fmt::Debug> fmt::Debug for SelectorPacket<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chosen: Vec<&Symbol> = self.chosen.iter().collect();
        chosen.sort_by(|lhs, rhs| lhs.display_order(rhs));
        f.debug_struct("SelectorPacket")
            .field("strengths", &self.strengths)
            .field("chosen", &chosen)
            .finish()
    }
}
