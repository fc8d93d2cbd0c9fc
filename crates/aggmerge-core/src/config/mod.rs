//! Module: config
//! Responsibility: per-column aggregate merge configuration and its resolution
//! against a table schema.
//! Does not own: function catalog data (see `function`).
//! Boundary: table properties in, validated column → function bindings out.

mod error;
mod function;


use crate::{
    function::{AggFunctionError, AggFunctionKind},
    obs::sink::{self, MetricsEvent, RejectKind},
};
use aggmerge_primitives::DataType;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use error::ConfigError;
pub use function::{AggFunction, AggFunctionParameters};

///
/// CONSTANTS
///

/// Prefix of every per-column property key.
pub const FIELDS_PREFIX: &str = "fields.";

/// Suffix selecting a column's function: `fields.<column>.agg`.
pub const AGG_SUFFIX: &str = ".agg";

/// Infix selecting a column's function parameter: `fields.<column>.agg.<param>`.
pub const AGG_PARAMETER_INFIX: &str = ".agg.";

/// Table-wide function applied to non-key columns without an explicit one.
pub const DEFAULT_FUNCTION_KEY: &str = "table.merge-engine.aggregate.default-function";

/// Function used when no default is configured.
pub const DEFAULT_AGG_FUNCTION: AggFunctionKind = AggFunctionKind::LastValueIgnoreNulls;

///
/// Column
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

///
/// ColumnAggregation
///
/// Raw per-column settings. `kind = None` means parameters were given but the
/// function falls back to the table default.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnAggregation {
    pub kind: Option<AggFunctionKind>,
    pub parameters: AggFunctionParameters,
}

///
/// AggregateMergeConfig
///
/// Unvalidated aggregate merge settings for one table.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AggregateMergeConfig {
    default_function: AggFunctionKind,
    columns: BTreeMap<String, ColumnAggregation>,
}

impl AggregateMergeConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_function: DEFAULT_AGG_FUNCTION,
            columns: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn with_default_function(mut self, kind: AggFunctionKind) -> Self {
        self.default_function = kind;
        self
    }

    /// Bind `function` to `column`, replacing any earlier binding.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, function: AggFunction) -> Self {
        let entry = self.columns.entry(column.into()).or_default();
        entry.kind = Some(function.kind());
        entry.parameters = function.parameters().clone();
        self
    }

    /// Collect aggregate merge settings from table properties.
    ///
    /// Keys outside the `fields.*.agg` / default-function scheme are ignored.
    /// Column names are split at the last `.agg` marker.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(name) = properties.get(DEFAULT_FUNCTION_KEY) {
            config.default_function =
                AggFunctionKind::parse(name).ok_or_else(|| ConfigError::UnknownDefaultFunction {
                    name: name.clone(),
                })?;
        }

        for (key, value) in properties {
            let Some(rest) = key.strip_prefix(FIELDS_PREFIX) else {
                continue;
            };

            if let Some(column) = rest.strip_suffix(AGG_SUFFIX) {
                let kind =
                    AggFunctionKind::parse(value).ok_or_else(|| ConfigError::UnknownFunction {
                        column: column.to_string(),
                        name: value.clone(),
                    })?;
                config.columns.entry(column.to_string()).or_default().kind = Some(kind);
            } else if let Some((column, parameter)) = rest.rsplit_once(AGG_PARAMETER_INFIX) {
                config
                    .columns
                    .entry(column.to_string())
                    .or_default()
                    .parameters
                    .insert(parameter, value.as_str());
            }
        }

        Ok(config)
    }

    #[must_use]
    pub const fn default_function(&self) -> AggFunctionKind {
        self.default_function
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnAggregation> {
        self.columns.get(name)
    }

    /// Bind every non-key column of `columns` to a validated function.
    ///
    /// Columns without settings get the table default. Records one
    /// `ConfigResolved` or `ConfigRejected` event per call.
    pub fn resolve(
        &self,
        columns: &[Column],
        primary_key: &[&str],
    ) -> Result<ResolvedMergeConfig, ConfigError> {
        let resolved = self.resolve_columns(columns, primary_key);

        match &resolved {
            Ok(config) => sink::record(MetricsEvent::ConfigResolved {
                columns: config.columns.len() as u64,
            }),
            Err(_) => sink::record(MetricsEvent::ConfigRejected),
        }

        resolved
    }

    fn resolve_columns(
        &self,
        columns: &[Column],
        primary_key: &[&str],
    ) -> Result<ResolvedMergeConfig, ConfigError> {
        let mut names = BTreeSet::new();
        for column in columns {
            if !names.insert(column.name.as_str()) {
                return Err(ConfigError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }

        for key in primary_key {
            if !names.contains(key) {
                return Err(ConfigError::UnknownPrimaryKey {
                    column: (*key).to_string(),
                });
            }
        }

        for column in self.columns.keys() {
            if !names.contains(column.as_str()) {
                return Err(ConfigError::UnknownColumn {
                    column: column.clone(),
                });
            }
            if primary_key.contains(&column.as_str()) {
                return Err(ConfigError::PrimaryKeyColumn {
                    column: column.clone(),
                });
            }
        }

        let mut resolved = Vec::with_capacity(columns.len().saturating_sub(primary_key.len()));
        for column in columns {
            if primary_key.contains(&column.name.as_str()) {
                continue;
            }

            let settings = self.columns.get(&column.name);
            let explicit = settings.is_some_and(|settings| settings.kind.is_some());
            let function = settings.map_or_else(
                || AggFunction::new(self.default_function),
                |settings| {
                    settings.parameters.iter().fold(
                        AggFunction::new(settings.kind.unwrap_or(self.default_function)),
                        |function, (name, value)| function.with_parameter(name, value),
                    )
                },
            );

            if let Err(source) = function.validate(&column.data_type) {
                sink::record(MetricsEvent::ColumnRejected {
                    kind: function.kind(),
                    reason: reject_kind(&source),
                });

                return Err(ConfigError::Function {
                    column: column.name.clone(),
                    source,
                });
            }

            sink::record(MetricsEvent::ColumnResolved {
                kind: function.kind(),
                explicit,
            });

            resolved.push(ResolvedColumn {
                name: column.name.clone(),
                data_type: column.data_type.clone(),
                function,
            });
        }

        Ok(ResolvedMergeConfig {
            primary_key: primary_key.iter().map(ToString::to_string).collect(),
            columns: resolved,
        })
    }
}

impl Default for AggregateMergeConfig {
    fn default() -> Self {
        Self::new()
    }
}

const fn reject_kind(err: &AggFunctionError) -> RejectKind {
    match err {
        AggFunctionError::InvalidParameter { .. } => RejectKind::Parameter,
        AggFunctionError::UnsupportedDataType { .. } => RejectKind::DataType,
    }
}

///
/// ResolvedColumn
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResolvedColumn {
    pub name: String,
    pub data_type: DataType,
    pub function: AggFunction,
}

///
/// ResolvedMergeConfig
///
/// Validated bindings for every non-key column, in schema order.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResolvedMergeConfig {
    primary_key: Vec<String>,
    columns: Vec<ResolvedColumn>,
}

impl ResolvedMergeConfig {
    #[must_use]
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    #[must_use]
    pub fn columns(&self) -> &[ResolvedColumn] {
        &self.columns
    }

    /// Return the function bound to `column`, or `None` for key/unknown columns.
    #[must_use]
    pub fn function(&self, column: &str) -> Option<&AggFunction> {
        self.columns
            .iter()
            .find(|resolved| resolved.name == column)
            .map(|resolved| &resolved.function)
    }
}
