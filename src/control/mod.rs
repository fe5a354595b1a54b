pub mod commands;
pub mod error;
pub mod interface;
pub mod relay;

pub use commands::{CommandData, Controller, collect_cmd_data};
pub use error::{ControlError, ControlErrorKind};
pub use interface::{Commands, FeatureInterface, RelayInterface, RelayTarget, group_by_dims};
pub use relay::FilteringRelay;
