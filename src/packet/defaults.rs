use std::{fmt, sync::Arc};

use crate::{
    packet::error::{PacketError, missing_key},
    symbols::{ConstructType, Symbol},
};

type DefaultFn<A> = dyn Fn(&Symbol) -> Option<A> + Send + Sync;

/// Strategy that supplies activations for keys a packet does not hold.
///
/// The base strategy has no default and reports a missing key.
pub struct DefaultActivation<A> {
    label: &'static str,
    policy: Option<Arc<DefaultFn<A>>>,
}

impl<A> DefaultActivation<A> {
    pub fn none() -> Self {
        Self {
            label: "none",
            policy: None,
        }
    }

    pub fn from_fn(
        label: &'static str,
        policy: impl Fn(&Symbol) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            policy: Some(Arc::new(policy)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_none(&self) -> bool {
        self.policy.is_none()
    }

    pub fn default_activation(&self, key: &Symbol) -> Result<A, PacketError> {
        self.policy
            .as_ref()
            .and_then(|policy| policy(key))
            .ok_or_else(|| missing_key(format!("no activation for {key} and no default")))
    }
}

impl<A> DefaultActivation<A>
where
    A: Clone + Send + Sync + 'static,
{
    pub fn constant(value: A) -> Self {
        Self::from_fn("constant", move |_| Some(value.clone()))
    }

    /// Defaults chosen by the key's construct type.
    ///
    /// Entries are tried in order with `ConstructType::is_in`; keys matching
    /// no entry get `fallback`, or no default when it is absent.
    pub fn by_ctype(entries: Vec<(ConstructType, A)>, fallback: Option<A>) -> Self {
        Self::from_fn("by_ctype", move |key| {
            entries
                .iter()
                .find(|(mask, _)| key.ctype().is_in(*mask))
                .map(|(_, value)| value.clone())
                .or_else(|| fallback.clone())
        })
    }
}

impl<A> Clone for DefaultActivation<A> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            policy: self.policy.clone(),
        }
    }
}

impl<A> Default for DefaultActivation<A> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A> fmt::Debug for DefaultActivation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultActivation({})", self.label)
    }
}
