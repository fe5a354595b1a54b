use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    control::error::{ControlError, invalid_controller},
    propagator::{error::PropagatorError, snapshot::Snapshot},
    symbols::{ConstructType, Symbol},
};

/// Feature-coded commands chosen by a controller in one cycle.
pub type CommandData = HashSet<Symbol>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawController {
    subsystem: Symbol,
    terminus: Symbol,
}

/// Address of a controller: the subsystem hosting it and the terminus that
/// emits its commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawController", into = "RawController")]
pub struct Controller {
    subsystem: Symbol,
    terminus: Symbol,
}

impl Controller {
    pub fn new(subsystem: Symbol, terminus: Symbol) -> Result<Self, ControlError> {
        if subsystem.ctype() != ConstructType::SUBSYSTEM {
            return Err(invalid_controller(format!(
                "controller subsystem must be a subsystem, got {subsystem}"
            )));
        }
        if terminus.ctype() != ConstructType::TERMINUS {
            return Err(invalid_controller(format!(
                "controller terminus must be a terminus, got {terminus}"
            )));
        }
        Ok(Self {
            subsystem,
            terminus,
        })
    }

    pub fn subsystem(&self) -> &Symbol {
        &self.subsystem
    }

    pub fn terminus(&self) -> &Symbol {
        &self.terminus
    }
}

impl TryFrom<RawController> for Controller {
    type Error = ControlError;

    fn try_from(raw: RawController) -> Result<Self, Self::Error> {
        Self::new(raw.subsystem, raw.terminus)
    }
}

impl From<Controller> for RawController {
    fn from(controller: Controller) -> Self {
        Self {
            subsystem: controller.subsystem,
            terminus: controller.terminus,
        }
    }
}

/// Extracts the commands addressed to `client` from the controller's output.
///
/// The controller subsystem must appear in `inputs` as a container. Its
/// terminus emits a container keyed by relay client, and the chosen set of
/// the selection under `client` is that relay's command data. A relay the
/// controller did not address this cycle gets no commands.
pub fn collect_cmd_data(
    client: &Symbol,
    inputs: &Snapshot,
    controller: &Controller,
) -> Result<CommandData, PropagatorError> {
    let addressed = inputs
        .container(controller.subsystem())?
        .container(controller.terminus())?;
    let data = match addressed.get(client) {
        Some(_) => addressed.selection(client)?.chosen().clone(),
        None => CommandData::new(),
    };

    tracing::debug!(
        target: "control",
        client = %client,
        subsystem = %controller.subsystem(),
        terminus = %controller.terminus(),
        addressed = addressed.contains(client),
        commands = data.len(),
        "command_data_collected"
    );

    Ok(data)
}
