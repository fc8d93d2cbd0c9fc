//! Core of AggMerge: the closed aggregation-function catalog, the type
//! classifier it validates against, and aggregate merge table configuration.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod function;
pub mod obs;
pub mod traits;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::{AggFunction, AggregateMergeConfig, Column},
        function::AggFunctionKind,
        traits::FieldType,
    };
    pub use aggmerge_primitives::{DataType, DataTypeFamily, DataTypeRoot};
}
