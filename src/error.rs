use thiserror::Error;

/// Errors produced when reading `DeltaOptions` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionsError {
    #[error("unknown delta option: {0}")]
    UnknownFlag(String),
}

pub type Result<T> = std::result::Result<T, ParseOptionsError>;
