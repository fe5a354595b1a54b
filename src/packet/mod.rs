pub mod activation;
pub mod defaults;
pub mod error;
pub mod ops;
pub mod selector;

pub use activation::ActivationPacket;
pub use defaults::DefaultActivation;
pub use error::{PacketError, PacketErrorKind};
pub use ops::{invert_strengths, multiplicative_filter, scale_strengths};
pub use selector::SelectorPacket;
