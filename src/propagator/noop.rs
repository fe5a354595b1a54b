use crate::{
    packet::ActivationPacket,
    propagator::{error::PropagatorError, ports::Propagator, snapshot::Snapshot},
    symbols::Symbol,
};

#[derive(Debug, Clone)]
pub struct NoopPropagator {
    client: Symbol,
}

impl NoopPropagator {
    pub fn new(client: Symbol) -> Self {
        Self { client }
    }
}

impl Propagator for NoopPropagator {
    type Output = ActivationPacket<f64>;

    fn client(&self) -> &Symbol {
        &self.client
    }

    fn expects(&self, _construct: &Symbol) -> bool {
        false
    }

    fn call(&self, _inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        Ok(ActivationPacket::new())
    }
}
