use aggmerge_primitives::{DataType, DataTypeFamily, DataTypeRoot};
use std::fmt;

///
/// FieldType
///
/// Type-classifier capability the catalog validates against.
/// Answers two queries only: the type's root identity and family membership.
/// `Display` renders the type inside rejection messages.
///

pub trait FieldType: fmt::Display {
    fn root(&self) -> DataTypeRoot;

    fn is_family(&self, family: DataTypeFamily) -> bool;

    /// Return whether this type belongs to at least one of `families`.
    fn is_any_of(&self, families: &[DataTypeFamily]) -> bool {
        families.iter().any(|family| self.is_family(*family))
    }
}

impl FieldType for DataType {
    fn root(&self) -> DataTypeRoot {
        Self::root(self)
    }

    fn is_family(&self, family: DataTypeFamily) -> bool {
        Self::is_family(self, family)
    }
}

impl FieldType for DataTypeRoot {
    fn root(&self) -> DataTypeRoot {
        *self
    }

    fn is_family(&self, family: DataTypeFamily) -> bool {
        Self::is_family(*self, family)
    }
}
