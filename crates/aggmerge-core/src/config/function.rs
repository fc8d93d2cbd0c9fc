use crate::{
    function::{AggFunctionError, AggFunctionKind, DEFAULT_DELIMITER, PARAM_DELIMITER},
    traits::FieldType,
};
use candid::CandidType;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// AggFunction
///
/// One configured aggregation: a catalog kind plus its named string parameters.
/// Parameters are checked against the catalog only by [`AggFunction::validate`].
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AggFunction {
    kind: AggFunctionKind,
    #[serde(default, skip_serializing_if = "AggFunctionParameters::is_empty")]
    parameters: AggFunctionParameters,
}

impl AggFunction {
    #[must_use]
    pub const fn new(kind: AggFunctionKind) -> Self {
        Self {
            kind,
            parameters: AggFunctionParameters::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    #[must_use]
    pub const fn sum() -> Self {
        Self::new(AggFunctionKind::Sum)
    }

    #[must_use]
    pub const fn product() -> Self {
        Self::new(AggFunctionKind::Product)
    }

    #[must_use]
    pub const fn max() -> Self {
        Self::new(AggFunctionKind::Max)
    }

    #[must_use]
    pub const fn min() -> Self {
        Self::new(AggFunctionKind::Min)
    }

    #[must_use]
    pub const fn last_value() -> Self {
        Self::new(AggFunctionKind::LastValue)
    }

    #[must_use]
    pub const fn last_value_ignore_nulls() -> Self {
        Self::new(AggFunctionKind::LastValueIgnoreNulls)
    }

    #[must_use]
    pub const fn first_value() -> Self {
        Self::new(AggFunctionKind::FirstValue)
    }

    #[must_use]
    pub const fn first_value_ignore_nulls() -> Self {
        Self::new(AggFunctionKind::FirstValueIgnoreNulls)
    }

    #[must_use]
    pub fn listagg(delimiter: impl Into<String>) -> Self {
        Self::new(AggFunctionKind::Listagg).with_parameter(PARAM_DELIMITER, delimiter)
    }

    #[must_use]
    pub fn string_agg(delimiter: impl Into<String>) -> Self {
        Self::new(AggFunctionKind::StringAgg).with_parameter(PARAM_DELIMITER, delimiter)
    }

    #[must_use]
    pub const fn bool_and() -> Self {
        Self::new(AggFunctionKind::BoolAnd)
    }

    #[must_use]
    pub const fn bool_or() -> Self {
        Self::new(AggFunctionKind::BoolOr)
    }

    #[must_use]
    pub const fn kind(&self) -> AggFunctionKind {
        self.kind
    }

    #[must_use]
    pub const fn parameters(&self) -> &AggFunctionParameters {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Return the effective delimiter for string-concatenation kinds.
    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        match self.kind {
            AggFunctionKind::Listagg | AggFunctionKind::StringAgg => {
                Some(self.parameter(PARAM_DELIMITER).unwrap_or(DEFAULT_DELIMITER))
            }
            _ => None,
        }
    }

    /// Validate every parameter, then the target column type.
    pub fn validate<T>(&self, field_type: &T) -> Result<(), AggFunctionError>
    where
        T: FieldType + ?Sized,
    {
        for (name, value) in self.parameters.iter() {
            self.kind.validate_parameter(name, Some(value.as_str()))?;
        }

        self.kind.validate_data_type(field_type)
    }
}

impl From<AggFunctionKind> for AggFunction {
    fn from(kind: AggFunctionKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for AggFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.parameters.is_empty() {
            return Ok(());
        }

        f.write_str("(")?;
        for (i, (name, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}='{value}'")?;
        }
        f.write_str(")")
    }
}

///
/// AggFunctionParameters
///
/// Named parameters of one configured function, ordered by name.
///

#[derive(
    CandidType, Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct AggFunctionParameters(BTreeMap<String, String>);

impl AggFunctionParameters {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace one parameter, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for AggFunctionParameters
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
