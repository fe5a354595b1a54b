use crate::{
    packet::{SelectorPacket, invert_strengths, multiplicative_filter},
    propagator::{
        error::PropagatorError,
        ports::Propagator,
        snapshot::{Emission, Snapshot},
    },
    symbols::{ConstructRef, Symbol},
};

/// Input-side filter around a terminus propagator.
///
/// Each source the base expects is weighted element-wise by the filter's
/// packet before the base runs.
#[doc(alias = "FilteredT")]
#[derive(Debug, Clone)]
pub struct Filtered<P> {
    base: P,
    filter: Symbol,
    invert_weights: bool,
}

impl<P> Filtered<P>
where
    P: Propagator<Output = SelectorPacket<f64>>,
{
    pub fn new(base: P, filter: Symbol, invert_weights: bool) -> Self {
        Self {
            base,
            filter,
            invert_weights,
        }
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn filter(&self) -> &Symbol {
        &self.filter
    }

    pub fn invert_weights(&self) -> bool {
        self.invert_weights
    }

    fn filter_inputs(&self, inputs: &Snapshot) -> Result<Snapshot, PropagatorError> {
        let raw = inputs.packet(&self.filter)?;
        let (weights, fill) = if self.invert_weights {
            (invert_strengths(raw), 1.0)
        } else {
            (raw.clone(), 0.0)
        };

        let filtered = inputs
            .iter()
            .filter(|(source, _)| self.base.expects(source))
            .map(|(source, emission)| {
                let emission = match emission {
                    Emission::Activations(packet) => Emission::Activations(
                        multiplicative_filter(&weights, source, packet, fill),
                    ),
                    Emission::Selection(selection) => Emission::Selection(SelectorPacket::new(
                        multiplicative_filter(&weights, source, selection.strengths(), fill),
                        selection.chosen().iter().cloned(),
                    )),
                    Emission::Container(_) => emission.clone(),
                };
                (source.clone(), emission)
            })
            .collect();
        Ok(filtered)
    }
}

impl<P> Propagator for Filtered<P>
where
    P: Propagator<Output = SelectorPacket<f64>>,
{
    type Output = SelectorPacket<f64>;

    fn client(&self) -> &Symbol {
        self.base.client()
    }

    fn expects(&self, construct: &Symbol) -> bool {
        *construct == self.filter || self.base.expects(construct)
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        let filtered = self.filter_inputs(inputs)?;

        tracing::debug!(
            target: "propagator",
            client = %self.client(),
            filter = %self.filter,
            inverted = self.invert_weights,
            sources = filtered.len(),
            "filter_applied"
        );

        self.base.call(&filtered)
    }

    fn entrust(&mut self, path: &ConstructRef) {
        self.base.entrust(path);
    }
}
