use crate::{
    control::{
        commands::{Controller, collect_cmd_data},
        interface::{FeatureInterface, RelayInterface},
    },
    packet::ActivationPacket,
    propagator::{
        error::{PropagatorError, internal_error},
        ports::Propagator,
        snapshot::Snapshot,
    },
    symbols::{ConstructRef, Symbol},
};

/// Computes gate and filter weights as directed by a controller.
///
/// Each interface dimension's command value becomes a weight that is
/// assigned to every client mapped from that dimension.
#[derive(Debug, Clone)]
pub struct FilteringRelay {
    client: Symbol,
    controller: Controller,
    interface: RelayInterface,
    address: Option<ConstructRef>,
}

impl FilteringRelay {
    pub fn new(client: Symbol, controller: Controller, interface: RelayInterface) -> Self {
        Self {
            client,
            controller,
            interface,
            address: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn interface(&self) -> &RelayInterface {
        &self.interface
    }

    /// Address recorded by the last `entrust`.
    pub fn address(&self) -> Option<&ConstructRef> {
        self.address.as_ref()
    }
}

impl Propagator for FilteringRelay {
    type Output = ActivationPacket<f64>;

    fn client(&self) -> &Symbol {
        &self.client
    }

    fn expects(&self, construct: &Symbol) -> bool {
        construct == self.controller.subsystem()
    }

    fn call(&self, inputs: &Snapshot) -> Result<Self::Output, PropagatorError> {
        let data = collect_cmd_data(&self.client, inputs, &self.controller)?;
        let commands = self.interface.parse_commands(&data)?;

        let mut weights = ActivationPacket::new().with_kind("relay_weights");
        for dim in self.interface.dims() {
            let cmd = commands
                .get(dim)
                .ok_or_else(|| internal_error(format!("no command parsed for dimension {dim}")))?;
            let strength = self.interface.strength_of(cmd).ok_or_else(|| {
                internal_error(format!("command {cmd} is not a value of dimension {dim}"))
            })?;
            let target = self
                .interface
                .target(dim)
                .ok_or_else(|| internal_error(format!("dimension {dim} has no clients")))?;
            for client in target.clients() {
                weights.insert(client.clone(), strength);
            }
        }

        tracing::debug!(
            target: "relay",
            client = %self.client,
            commands = ?commands,
            weights = weights.len(),
            "relay_weights_computed"
        );

        Ok(weights)
    }

    fn entrust(&mut self, path: &ConstructRef) {
        self.address = Some(path.clone());
    }
}
