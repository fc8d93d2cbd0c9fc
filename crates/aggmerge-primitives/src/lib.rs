//! Column data type vocabulary shared by the aggregate merge catalog.
//!
//! The root → family classification lives in a single registry macro so
//! every consumer sees the same answer for "does this type belong to F".

#[macro_use]
mod macros;
mod data_type;


pub use data_type::{DataType, DataTypeKind, RowField};

use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// DataTypeRoot
///
/// Canonical type identity, independent of length/precision/nullability.
///

#[derive(
    CandidType, Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum DataTypeRoot {
    Char,
    String,
    Boolean,
    Binary,
    Bytes,
    Decimal,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Date,
    Time,
    Timestamp,
    TimestampLtz,
    Array,
    Map,
    Row,
}

impl DataTypeRoot {
    /// Return every family this root belongs to, in registry order.
    #[must_use]
    pub const fn families(self) -> &'static [DataTypeFamily] {
        data_type_root_registry!(families_from_registry, self)
    }

    /// Return the canonical SQL-style name for this root.
    #[must_use]
    pub const fn name(self) -> &'static str {
        data_type_root_registry!(name_from_registry, self)
    }

    /// Return whether this root belongs to `family`.
    #[must_use]
    pub const fn is_family(self, family: DataTypeFamily) -> bool {
        let families = self.families();
        let mut i = 0;
        while i < families.len() {
            if families[i] as u8 == family as u8 {
                return true;
            }
            i += 1;
        }

        false
    }

    /// Return whether this root belongs to at least one of `families`.
    #[must_use]
    pub const fn is_any_of(self, families: &[DataTypeFamily]) -> bool {
        let mut i = 0;
        while i < families.len() {
            if self.is_family(families[i]) {
                return true;
            }
            i += 1;
        }

        false
    }
}

impl fmt::Display for DataTypeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// DataTypeFamily
///
/// Coarse grouping of type roots used for capability checks.
/// A root belongs to several families at once.
///

#[derive(
    CandidType, Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(u8)]
pub enum DataTypeFamily {
    Predefined,
    Constructed,
    CharacterString,
    BinaryString,
    Numeric,
    IntegerNumeric,
    ExactNumeric,
    ApproximateNumeric,
    Datetime,
    Time,
    Timestamp,
    Collection,
    Extension,
}

impl DataTypeFamily {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Predefined => "PREDEFINED",
            Self::Constructed => "CONSTRUCTED",
            Self::CharacterString => "CHARACTER_STRING",
            Self::BinaryString => "BINARY_STRING",
            Self::Numeric => "NUMERIC",
            Self::IntegerNumeric => "INTEGER_NUMERIC",
            Self::ExactNumeric => "EXACT_NUMERIC",
            Self::ApproximateNumeric => "APPROXIMATE_NUMERIC",
            Self::Datetime => "DATETIME",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Collection => "COLLECTION",
            Self::Extension => "EXTENSION",
        }
    }
}

impl fmt::Display for DataTypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered list of all type roots in registry order.
pub const ALL_DATA_TYPE_ROOTS: [DataTypeRoot; 19] =
    data_type_root_registry!(all_roots_from_registry);

/// Every declared family. A capability listing all of them accepts any type.
pub const ALL_DATA_TYPE_FAMILIES: [DataTypeFamily; 13] = [
    DataTypeFamily::Predefined,
    DataTypeFamily::Constructed,
    DataTypeFamily::CharacterString,
    DataTypeFamily::BinaryString,
    DataTypeFamily::Numeric,
    DataTypeFamily::IntegerNumeric,
    DataTypeFamily::ExactNumeric,
    DataTypeFamily::ApproximateNumeric,
    DataTypeFamily::Datetime,
    DataTypeFamily::Time,
    DataTypeFamily::Timestamp,
    DataTypeFamily::Collection,
    DataTypeFamily::Extension,
];
