use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlErrorKind {
    InvalidInterface,
    InvalidController,
    InvalidCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ControlError {
    pub kind: ControlErrorKind,
    pub message: String,
}

impl ControlError {
    pub fn new(kind: ControlErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn invalid_interface(message: impl Into<String>) -> ControlError {
    ControlError::new(ControlErrorKind::InvalidInterface, message)
}

pub fn invalid_controller(message: impl Into<String>) -> ControlError {
    ControlError::new(ControlErrorKind::InvalidController, message)
}

pub fn invalid_command(message: impl Into<String>) -> ControlError {
    ControlError::new(ControlErrorKind::InvalidCommand, message)
}
