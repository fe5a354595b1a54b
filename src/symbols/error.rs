use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolErrorKind {
    TypeMismatch,
    UnknownConstructType,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SymbolError {
    pub kind: SymbolErrorKind,
    pub message: String,
}

impl SymbolError {
    pub fn new(kind: SymbolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn type_mismatch(message: impl Into<String>) -> SymbolError {
    SymbolError::new(SymbolErrorKind::TypeMismatch, message)
}

pub fn unknown_construct_type(message: impl Into<String>) -> SymbolError {
    SymbolError::new(SymbolErrorKind::UnknownConstructType, message)
}

pub fn parse_error(message: impl Into<String>) -> SymbolError {
    SymbolError::new(SymbolErrorKind::Parse, message)
}
