use crate::{
    propagator::{
        error::PropagatorError,
        snapshot::{Emission, Snapshot},
    },
    symbols::{ConstructRef, Symbol},
};

/// Computes the output of one client construct from the activations it
/// expects.
///
/// Implementations must not mutate their inputs and must surface a missing
/// input as an error rather than substitute a value.
pub trait Propagator: Send + Sync {
    type Output: Into<Emission>;

    fn client(&self) -> &Symbol;

    fn expects(&self, construct: &Symbol) -> bool;

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError>;

    /// Records the address under which the client is hosted.
    fn entrust(&mut self, _path: &ConstructRef) {}

    /// Runs `call` and wraps the output for a downstream snapshot.
    fn emit(&self, inputs: &Snapshot) -> Result<Emission, PropagatorError> {
        self.call(inputs).map(Into::into)
    }
}

impl<P: Propagator + ?Sized> Propagator for Box<P> {
    type Output = P::Output;

    fn client(&self) -> &Symbol {
        (**self).client()
    }

    fn expects(&self, construct: &Symbol) -> bool {
        (**self).expects(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        (**self).call(inputs)
    }

    fn entrust(&mut self, path: &ConstructRef) {
        (**self).entrust(path)
    }
}
