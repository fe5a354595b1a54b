use thiserror::Error;

use crate::{
    control::error::{ControlError, ControlErrorKind},
    packet::error::PacketError,
    symbols::error::SymbolError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagatorErrorKind {
    MissingInput,
    TypeMismatch,
    UnknownTransform,
    InvalidCommand,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PropagatorError {
    pub kind: PropagatorErrorKind,
    pub message: String,
}

impl PropagatorError {
    pub fn new(kind: PropagatorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn missing_input(message: impl Into<String>) -> PropagatorError {
    PropagatorError::new(PropagatorErrorKind::MissingInput, message)
}

pub fn type_mismatch(message: impl Into<String>) -> PropagatorError {
    PropagatorError::new(PropagatorErrorKind::TypeMismatch, message)
}

pub fn unknown_transform(message: impl Into<String>) -> PropagatorError {
    PropagatorError::new(PropagatorErrorKind::UnknownTransform, message)
}

pub fn invalid_command(message: impl Into<String>) -> PropagatorError {
    PropagatorError::new(PropagatorErrorKind::InvalidCommand, message)
}

pub fn internal_error(message: impl Into<String>) -> PropagatorError {
    PropagatorError::new(PropagatorErrorKind::Internal, message)
}

// A missing activation is a missing input from the propagator's point of view.
impl From<PacketError> for PropagatorError {
    fn from(err: PacketError) -> Self {
        missing_input(err.message)
    }
}

impl From<SymbolError> for PropagatorError {
    fn from(err: SymbolError) -> Self {
        type_mismatch(err.message)
    }
}

impl From<ControlError> for PropagatorError {
    fn from(err: ControlError) -> Self {
        match err.kind {
            ControlErrorKind::InvalidCommand => invalid_command(err.message),
            ControlErrorKind::InvalidInterface | ControlErrorKind::InvalidController => {
                internal_error(err.message)
            }
        }
    }
}
