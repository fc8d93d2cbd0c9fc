//! ## Crate layout
//! - `core`: function catalog, type classifier trait, merge configuration, and observability.
//! - `primitives`: data type roots, families, and concrete column types.
//! - `error`: public error taxonomy for configuration surfaces.
//!
//! The `prelude` module mirrors the vocabulary used when declaring tables.

pub use aggmerge_core as core;
pub use aggmerge_primitives as primitives;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::{AggFunction, AggregateMergeConfig, Column, ResolvedMergeConfig},
        function::{AggFunctionKind, DataTypeRule},
        traits::FieldType as _,
    };
    pub use crate::primitives::{DataType, DataTypeFamily, DataTypeRoot};
    pub use candid::CandidType;
    pub use serde::{Deserialize, Serialize};
}
