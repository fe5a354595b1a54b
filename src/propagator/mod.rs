pub mod error;
pub mod filtered;
pub mod gated;
pub mod noop;
pub mod ports;
pub mod snapshot;
pub mod testing;
pub mod transforms;

pub use error::{PropagatorError, PropagatorErrorKind};
pub use filtered::Filtered;
pub use gated::Gated;
pub use noop::NoopPropagator;
pub use ports::Propagator;
pub use snapshot::{Emission, Snapshot};
pub use transforms::{GateTransform, TransformRegistry};
