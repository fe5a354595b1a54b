use crate::{
    packet::{ActivationPacket, scale_strengths},
    propagator::{
        error::PropagatorError,
        ports::Propagator,
        snapshot::Snapshot,
        transforms::{GateTransform, TransformRegistry},
    },
    symbols::{ConstructRef, Symbol},
};

/// Output-side gate around an activation propagator.
///
/// The gate's strength for the client, passed through the transform, scales
/// every value the base emits.
#[doc(alias = "GatedA")]
#[derive(Debug, Clone)]
pub struct Gated<P> {
    base: P,
    gate: Symbol,
    transform: GateTransform,
}

impl<P> Gated<P>
where
    P: Propagator<Output = ActivationPacket<f64>>,
{
    /// Looks `transform` up in the default registry.
    pub fn new(base: P, gate: Symbol, transform: &str) -> Result<Self, PropagatorError> {
        let transform = TransformRegistry::default().lookup(transform)?;
        Ok(Self::with_transform(base, gate, transform))
    }

    pub fn with_transform(base: P, gate: Symbol, transform: GateTransform) -> Self {
        Self {
            base,
            gate,
            transform,
        }
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn gate(&self) -> &Symbol {
        &self.gate
    }

    pub fn transform(&self) -> &GateTransform {
        &self.transform
    }
}

impl<P> Propagator for Gated<P>
where
    P: Propagator<Output = ActivationPacket<f64>>,
{
    type Output = ActivationPacket<f64>;

    fn client(&self) -> &Symbol {
        self.base.client()
    }

    fn expects(&self, construct: &Symbol) -> bool {
        *construct == self.gate || self.base.expects(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        let weight = inputs.packet(&self.gate)?.resolve(self.client())?;
        let base_inputs = inputs.restrict(|source| self.base.expects(source));
        let output = self.base.call(&base_inputs)?;
        let scale = self.transform.apply(weight);

        tracing::debug!(
            target: "propagator",
            client = %self.client(),
            gate = %self.gate,
            transform = self.transform.name(),
            weight,
            scale,
            "gate_applied"
        );

        Ok(scale_strengths(scale, &output))
    }

    fn entrust(&mut self, path: &ConstructRef) {
        self.base.entrust(path);
    }
}
