use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketErrorKind {
    MissingKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PacketError {
    pub kind: PacketErrorKind,
    pub message: String,
}

impl PacketError {
    pub fn new(kind: PacketErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn missing_key(message: impl Into<String>) -> PacketError {
    PacketError::new(PacketErrorKind::MissingKey, message)
}
