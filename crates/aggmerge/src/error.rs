use aggmerge_core::{
    config::ConfigError,
    function::{AggFunctionError, UnknownAggFunctionError},
};
use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_origin(&self) -> String {
        format!("{}:{}: {}", self.origin, self.kind, self.message)
    }
}

impl From<AggFunctionError> for Error {
    fn from(err: AggFunctionError) -> Self {
        Self::new(ErrorKind::from(&err), ErrorOrigin::Function, err.to_string())
    }
}

impl From<UnknownAggFunctionError> for Error {
    fn from(err: UnknownAggFunctionError) -> Self {
        Self::new(
            ErrorKind::UnknownFunction,
            ErrorOrigin::Function,
            err.to_string(),
        )
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match &err {
            ConfigError::Function { source, .. } => ErrorKind::from(source),
            ConfigError::UnknownFunction { .. } | ConfigError::UnknownDefaultFunction { .. } => {
                ErrorKind::UnknownFunction
            }
            ConfigError::UnknownColumn { .. }
            | ConfigError::UnknownPrimaryKey { .. }
            | ConfigError::DuplicateColumn { .. }
            | ConfigError::PrimaryKeyColumn { .. } => ErrorKind::InvalidConfig,
        };

        Self::new(kind, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers rendering configuration errors.
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Unrecognized parameter name or a disallowed parameter value.
    #[display("invalid_parameter")]
    InvalidParameter,

    /// Column type is outside the function's declared type support.
    #[display("unsupported_data_type")]
    UnsupportedDataType,

    /// A function name that had to resolve did not.
    #[display("unknown_function")]
    UnknownFunction,

    /// Configuration does not fit the table schema.
    #[display("invalid_config")]
    InvalidConfig,
}

impl From<&AggFunctionError> for ErrorKind {
    fn from(err: &AggFunctionError) -> Self {
        match err {
            AggFunctionError::InvalidParameter { .. } => Self::InvalidParameter,
            AggFunctionError::UnsupportedDataType { .. } => Self::UnsupportedDataType,
        }
    }
}

///
/// ErrorOrigin
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    #[display("function")]
    Function,

    #[display("config")]
    Config,
}
