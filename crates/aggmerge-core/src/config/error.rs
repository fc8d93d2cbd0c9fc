use crate::function::AggFunctionError;
use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Aggregate merge configuration failures. Unlike catalog lookups, a function
/// name written into table properties must resolve.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("unknown aggregation function '{name}' configured for column '{column}'")]
    UnknownFunction { column: String, name: String },

    #[error("unknown default aggregation function '{name}'")]
    UnknownDefaultFunction { name: String },

    #[error("aggregation configured for unknown column '{column}'")]
    UnknownColumn { column: String },

    #[error("primary key column '{column}' is not defined in the schema")]
    UnknownPrimaryKey { column: String },

    #[error("duplicate column '{column}' in schema")]
    DuplicateColumn { column: String },

    #[error("primary key column '{column}' cannot declare an aggregation function")]
    PrimaryKeyColumn { column: String },

    #[error("invalid aggregation for column '{column}': {source}")]
    Function {
        column: String,
        #[source]
        source: AggFunctionError,
    },
}
