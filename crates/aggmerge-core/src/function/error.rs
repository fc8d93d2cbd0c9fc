//! Module: function::error
//! Responsibility: catalog validation error taxonomy.
//! Boundary: typed errors rendered directly into table configuration messages.

use crate::function::{AggFunctionKind, DataTypeRule};
use std::fmt;
use thiserror::Error as ThisError;

///
/// AggFunctionError
///
/// Constraint violations raised while validating a function against its
/// parameters or its target column type.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AggFunctionError {
    #[error("parameter '{parameter}' {reason} for aggregation function '{kind}'")]
    InvalidParameter {
        kind: AggFunctionKind,
        parameter: String,
        reason: InvalidParameterReason,
    },

    #[error("data type for {kind} column must be {rule} but was '{data_type}'")]
    UnsupportedDataType {
        kind: AggFunctionKind,
        data_type: String,
        rule: DataTypeRule,
    },
}

impl AggFunctionError {
    #[must_use]
    pub const fn kind(&self) -> AggFunctionKind {
        match self {
            Self::InvalidParameter { kind, .. } | Self::UnsupportedDataType { kind, .. } => *kind,
        }
    }
}

///
/// InvalidParameterReason
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidParameterReason {
    #[error("is not supported (supported parameters: {supported})")]
    Unsupported { supported: SupportedParameters },

    #[error("must be a non-empty string")]
    EmptyValue,
}

///
/// SupportedParameters
///
/// Supported-parameter set carried by rejection errors; renders `none` when empty.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SupportedParameters(&'static [&'static str]);

impl SupportedParameters {
    #[must_use]
    pub const fn new(parameters: &'static [&'static str]) -> Self {
        Self(parameters)
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SupportedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }

        write!(f, "[{}]", self.0.join(", "))
    }
}

///
/// UnknownAggFunctionError
///
/// Returned only by strict `FromStr` parsing. Lenient lookups return `None`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown aggregation function '{name}'")]
pub struct UnknownAggFunctionError {
    pub name: String,
}
