//! Module: function
//! Responsibility: closed aggregation-function catalog plus parameter/type validation.
//! Does not own: computing aggregate values or binding functions to columns.
//! Boundary: pure, const catalog consumed by `config` and by external callers.

#[macro_use]
mod registry;
mod error;

#[cfg(test)]
mod tests;

use crate::traits::FieldType;
use aggmerge_primitives::{ALL_DATA_TYPE_FAMILIES, DataTypeFamily, DataTypeRoot};
use candid::CandidType;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

pub use error::{
    AggFunctionError, InvalidParameterReason, SupportedParameters, UnknownAggFunctionError,
};

///
/// CONSTANTS
///

/// Separator parameter of the string-concatenation functions.
pub const PARAM_DELIMITER: &str = "delimiter";

/// Delimiter used by LISTAGG/STRING_AGG when none is configured.
pub const DEFAULT_DELIMITER: &str = ",";

///
/// AggFunctionKind
///
/// Closed set of aggregation functions usable by the aggregate merge engine
/// on non-key columns. Catalog data for each kind lives in the registry.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AggFunctionKind {
    // numeric
    Sum,
    Product,
    Max,
    Min,

    // value selection
    LastValue,
    LastValueIgnoreNulls,
    FirstValue,
    FirstValueIgnoreNulls,

    // string concatenation
    Listagg,
    StringAgg,

    // boolean
    BoolAnd,
    BoolOr,
}

impl AggFunctionKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 12] = agg_function_registry!(all_kinds_from_registry);

    /// Return the static catalog entry for this kind.
    #[must_use]
    pub const fn descriptor(self) -> AggFunctionDescriptor {
        agg_function_registry!(descriptor_from_registry, self)
    }

    /// Canonical upper-case underscore name (`LAST_VALUE_IGNORE_NULLS`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Lower-case identifier used in configuration (`last_value_ignore_nulls`).
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        self.descriptor().identifier
    }

    #[must_use]
    pub const fn supported_parameters(self) -> &'static [&'static str] {
        self.descriptor().parameters
    }

    #[must_use]
    pub const fn data_type_rule(self) -> DataTypeRule {
        self.descriptor().data_type_rule
    }

    /// Return whether `parameter` is recognized by this function.
    #[must_use]
    pub fn supports_parameter(self, parameter: &str) -> bool {
        self.supported_parameters().contains(&parameter)
    }

    /// Resolve a function name written in any supported spelling.
    ///
    /// Surrounding whitespace is trimmed, `-` is read as `_`, and the name is
    /// upper-cased with the locale-independent Unicode mapping. Absent, blank,
    /// and unknown names resolve to `None`; probing with an unknown name is not
    /// an error.
    #[must_use]
    pub fn from_identifier(name: Option<&str>) -> Option<Self> {
        let trimmed = name?.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = trimmed.replace('-', "_").to_uppercase();

        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
    }

    /// Shorthand for [`Self::from_identifier`] on a present name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_identifier(Some(name))
    }

    /// Validate one named parameter and its value for this function.
    ///
    /// Unrecognized names are rejected with the full supported set. Recognized
    /// names then go through the kind's value rules; kinds without rules
    /// accept any value.
    pub fn validate_parameter(
        self,
        parameter: &str,
        value: Option<&str>,
    ) -> Result<(), AggFunctionError> {
        if !self.supports_parameter(parameter) {
            return Err(AggFunctionError::InvalidParameter {
                kind: self,
                parameter: parameter.to_string(),
                reason: InvalidParameterReason::Unsupported {
                    supported: SupportedParameters::new(self.supported_parameters()),
                },
            });
        }

        match self {
            Self::Listagg | Self::StringAgg => {
                if parameter == PARAM_DELIMITER && value.is_none_or(str::is_empty) {
                    return Err(AggFunctionError::InvalidParameter {
                        kind: self,
                        parameter: parameter.to_string(),
                        reason: InvalidParameterReason::EmptyValue,
                    });
                }
            }
            Self::Sum
            | Self::Product
            | Self::Max
            | Self::Min
            | Self::LastValue
            | Self::LastValueIgnoreNulls
            | Self::FirstValue
            | Self::FirstValueIgnoreNulls
            | Self::BoolAnd
            | Self::BoolOr => {}
        }

        Ok(())
    }

    /// Validate that a column of `field_type` can be aggregated by this function.
    pub fn validate_data_type<T>(self, field_type: &T) -> Result<(), AggFunctionError>
    where
        T: FieldType + ?Sized,
    {
        let rule = self.data_type_rule();
        if rule.accepts(field_type) {
            return Ok(());
        }

        Err(AggFunctionError::UnsupportedDataType {
            kind: self,
            data_type: field_type.to_string(),
            rule,
        })
    }
}

impl fmt::Display for AggFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for AggFunctionKind {
    type Err = UnknownAggFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownAggFunctionError {
            name: s.to_string(),
        })
    }
}

// ----------------------------------------------------------------------
// Wire integration
// ----------------------------------------------------------------------

impl CandidType for AggFunctionKind {
    fn _ty() -> candid::types::Type {
        <String as CandidType>::_ty()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: candid::types::Serializer,
    {
        serializer.serialize_text(self.identifier())
    }
}

impl Serialize for AggFunctionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for AggFunctionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;

        Self::parse(&name).ok_or_else(|| de::Error::custom(UnknownAggFunctionError { name }))
    }
}

///
/// AggFunctionDescriptor
///
/// Immutable catalog entry for one function kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AggFunctionDescriptor {
    pub kind: AggFunctionKind,
    pub name: &'static str,
    pub identifier: &'static str,
    pub parameters: &'static [&'static str],
    pub data_type_rule: DataTypeRule,
}

///
/// DataTypeRule
///
/// How a function decides which column types it accepts.
/// `ExactRoot` is for kinds with no family to match on (boolean aggregation);
/// `Families` is an any-of family membership test.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataTypeRule {
    ExactRoot(DataTypeRoot),
    Families(&'static [DataTypeFamily]),
}

impl DataTypeRule {
    /// Return whether a column of `field_type` satisfies this rule.
    #[must_use]
    pub fn accepts<T>(self, field_type: &T) -> bool
    where
        T: FieldType + ?Sized,
    {
        match self {
            Self::ExactRoot(root) => field_type.root() == root,
            Self::Families(families) => field_type.is_any_of(families),
        }
    }

    /// Return whether every type is accepted.
    #[must_use]
    pub fn accepts_all(self) -> bool {
        match self {
            Self::ExactRoot(_) => false,
            Self::Families(families) => ALL_DATA_TYPE_FAMILIES
                .iter()
                .all(|family| families.contains(family)),
        }
    }
}

impl fmt::Display for DataTypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactRoot(root) => write!(f, "'{root}'"),
            Self::Families(families) => {
                f.write_str("part of [")?;
                for (i, family) in families.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{family}")?;
                }
                f.write_str("]")
            }
        }
    }
}
