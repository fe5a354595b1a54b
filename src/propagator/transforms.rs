use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::propagator::error::{PropagatorError, unknown_transform};

/// Named scalar map applied to a gate weight.
#[derive(Clone)]
pub struct GateTransform {
    name: Arc<str>,
    apply: fn(f64) -> f64,
}

impl GateTransform {
    pub fn new(name: impl Into<Arc<str>>, apply: fn(f64) -> f64) -> Self {
        Self {
            name: name.into(),
            apply,
        }
    }

    pub fn eye() -> Self {
        Self::new("eye", |weight| weight)
    }

    pub fn inv() -> Self {
        Self::new("inv", |weight| 1.0 - weight)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, weight: f64) -> f64 {
        (self.apply)(weight)
    }
}

impl fmt::Debug for GateTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GateTransform({})", self.name)
    }
}

/// Gate transforms addressable by name. Starts with `eye` and `inv`.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: BTreeMap<Arc<str>, GateTransform>,
}

impl TransformRegistry {
    pub fn empty() -> Self {
        Self {
            transforms: BTreeMap::new(),
        }
    }

    /// Adds `transform`, replacing any transform of the same name.
    pub fn register(&mut self, transform: GateTransform) -> Option<GateTransform> {
        self.transforms.insert(transform.name.clone(), transform)
    }

    pub fn lookup(&self, name: &str) -> Result<GateTransform, PropagatorError> {
        self.transforms.get(name).cloned().ok_or_else(|| {
            unknown_transform(format!(
                "unknown gate transform '{name}', expected one of: {}",
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(AsRef::as_ref)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(GateTransform::eye());
        registry.register(GateTransform::inv());
        registry
    }
}
