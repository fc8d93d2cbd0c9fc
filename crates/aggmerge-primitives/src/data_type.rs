use crate::{DataTypeFamily, DataTypeRoot};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// DataType
///
/// Concrete column type: a parameterized kind plus nullability.
/// Types are nullable unless built with [`DataType::not_null`].
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DataType {
    kind: DataTypeKind,
    nullable: bool,
}

impl DataType {
    #[must_use]
    pub const fn new(kind: DataTypeKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }

    #[must_use]
    pub const fn char(length: u32) -> Self {
        Self::new(DataTypeKind::Char { length })
    }

    #[must_use]
    pub const fn string() -> Self {
        Self::new(DataTypeKind::String)
    }

    #[must_use]
    pub const fn boolean() -> Self {
        Self::new(DataTypeKind::Boolean)
    }

    #[must_use]
    pub const fn binary(length: u32) -> Self {
        Self::new(DataTypeKind::Binary { length })
    }

    #[must_use]
    pub const fn bytes() -> Self {
        Self::new(DataTypeKind::Bytes)
    }

    #[must_use]
    pub const fn decimal(precision: u8, scale: u8) -> Self {
        Self::new(DataTypeKind::Decimal { precision, scale })
    }

    #[must_use]
    pub const fn tiny_int() -> Self {
        Self::new(DataTypeKind::TinyInt)
    }

    #[must_use]
    pub const fn small_int() -> Self {
        Self::new(DataTypeKind::SmallInt)
    }

    #[must_use]
    pub const fn int() -> Self {
        Self::new(DataTypeKind::Int)
    }

    #[must_use]
    pub const fn big_int() -> Self {
        Self::new(DataTypeKind::BigInt)
    }

    #[must_use]
    pub const fn float() -> Self {
        Self::new(DataTypeKind::Float)
    }

    #[must_use]
    pub const fn double() -> Self {
        Self::new(DataTypeKind::Double)
    }

    #[must_use]
    pub const fn date() -> Self {
        Self::new(DataTypeKind::Date)
    }

    #[must_use]
    pub const fn time(precision: u8) -> Self {
        Self::new(DataTypeKind::Time { precision })
    }

    #[must_use]
    pub const fn timestamp(precision: u8) -> Self {
        Self::new(DataTypeKind::Timestamp { precision })
    }

    #[must_use]
    pub const fn timestamp_ltz(precision: u8) -> Self {
        Self::new(DataTypeKind::TimestampLtz { precision })
    }

    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::new(DataTypeKind::Array(Box::new(element)))
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::new(DataTypeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Build a row type from `(name, type)` pairs in declaration order.
    #[must_use]
    pub fn row<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, Self)>,
        N: Into<String>,
    {
        Self::new(DataTypeKind::Row(
            fields
                .into_iter()
                .map(|(name, data_type)| RowField::new(name, data_type))
                .collect(),
        ))
    }

    /// Return the same type with nullability removed.
    #[must_use]
    pub fn not_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &DataTypeKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Return the parameter-free identity of this type.
    #[must_use]
    pub const fn root(&self) -> DataTypeRoot {
        self.kind.root()
    }

    #[must_use]
    pub const fn is_family(&self, family: DataTypeFamily) -> bool {
        self.root().is_family(family)
    }

    #[must_use]
    pub const fn is_any_of(&self, families: &[DataTypeFamily]) -> bool {
        self.root().is_any_of(families)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }

        Ok(())
    }
}

///
/// DataTypeKind
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DataTypeKind {
    Char { length: u32 },
    String,
    Boolean,
    Binary { length: u32 },
    Bytes,
    Decimal { precision: u8, scale: u8 },
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Date,
    Time { precision: u8 },
    Timestamp { precision: u8 },
    TimestampLtz { precision: u8 },
    Array(Box<DataType>),
    Map { key: Box<DataType>, value: Box<DataType> },
    Row(Vec<RowField>),
}

impl DataTypeKind {
    #[must_use]
    pub const fn root(&self) -> DataTypeRoot {
        match self {
            Self::Char { .. } => DataTypeRoot::Char,
            Self::String => DataTypeRoot::String,
            Self::Boolean => DataTypeRoot::Boolean,
            Self::Binary { .. } => DataTypeRoot::Binary,
            Self::Bytes => DataTypeRoot::Bytes,
            Self::Decimal { .. } => DataTypeRoot::Decimal,
            Self::TinyInt => DataTypeRoot::TinyInt,
            Self::SmallInt => DataTypeRoot::SmallInt,
            Self::Int => DataTypeRoot::Int,
            Self::BigInt => DataTypeRoot::BigInt,
            Self::Float => DataTypeRoot::Float,
            Self::Double => DataTypeRoot::Double,
            Self::Date => DataTypeRoot::Date,
            Self::Time { .. } => DataTypeRoot::Time,
            Self::Timestamp { .. } => DataTypeRoot::Timestamp,
            Self::TimestampLtz { .. } => DataTypeRoot::TimestampLtz,
            Self::Array(_) => DataTypeRoot::Array,
            Self::Map { .. } => DataTypeRoot::Map,
            Self::Row(_) => DataTypeRoot::Row,
        }
    }
}

impl fmt::Display for DataTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root().name();
        match self {
            Self::Char { length } | Self::Binary { length } => write!(f, "{root}({length})"),
            Self::Decimal { precision, scale } => write!(f, "{root}({precision}, {scale})"),
            Self::Time { precision }
            | Self::Timestamp { precision }
            | Self::TimestampLtz { precision } => write!(f, "{root}({precision})"),
            Self::Array(element) => write!(f, "{root}<{element}>"),
            Self::Map { key, value } => write!(f, "{root}<{key}, {value}>"),
            Self::Row(fields) => {
                write!(f, "{root}<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", field.name, field.data_type)?;
                }
                f.write_str(">")
            }
            Self::String
            | Self::Boolean
            | Self::Bytes
            | Self::TinyInt
            | Self::SmallInt
            | Self::Int
            | Self::BigInt
            | Self::Float
            | Self::Double
            | Self::Date => f.write_str(root),
        }
    }
}

///
/// RowField
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RowField {
    pub name: String,
    pub data_type: DataType,
}

impl RowField {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
