// NOTE: Boolean is Predefined only. It has no value family of its own, so
// boolean-only consumers must match on the root, never on a family.
// NOTE: TimestampLtz and Map carry Extension on top of their base families.
#[macro_export]
macro_rules! data_type_root_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Char, "CHAR", families = [Predefined, CharacterString]),
            (String, "STRING", families = [Predefined, CharacterString]),
            (Boolean, "BOOLEAN", families = [Predefined]),
            (Binary, "BINARY", families = [Predefined, BinaryString]),
            (Bytes, "BYTES", families = [Predefined, BinaryString]),
            (Decimal, "DECIMAL", families = [Predefined, Numeric, ExactNumeric]),
            (
                TinyInt,
                "TINYINT",
                families = [Predefined, Numeric, IntegerNumeric, ExactNumeric]
            ),
            (
                SmallInt,
                "SMALLINT",
                families = [Predefined, Numeric, IntegerNumeric, ExactNumeric]
            ),
            (
                Int,
                "INT",
                families = [Predefined, Numeric, IntegerNumeric, ExactNumeric]
            ),
            (
                BigInt,
                "BIGINT",
                families = [Predefined, Numeric, IntegerNumeric, ExactNumeric]
            ),
            (Float, "FLOAT", families = [Predefined, Numeric, ApproximateNumeric]),
            (Double, "DOUBLE", families = [Predefined, Numeric, ApproximateNumeric]),
            (Date, "DATE", families = [Predefined, Datetime]),
            (Time, "TIME", families = [Predefined, Datetime, Time]),
            (Timestamp, "TIMESTAMP", families = [Predefined, Datetime, Timestamp]),
            (
                TimestampLtz,
                "TIMESTAMP_LTZ",
                families = [Predefined, Datetime, Timestamp, Extension]
            ),
            (Array, "ARRAY", families = [Constructed, Collection]),
            (Map, "MAP", families = [Constructed, Extension]),
            (Row, "ROW", families = [Constructed]),
        }
    };
}

#[macro_export]
macro_rules! data_type_root_registry {
    ($macro:ident) => {
        $crate::data_type_root_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::data_type_root_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! families_from_registry {
    ( @args $root:expr; @entries $( ($variant:ident, $name:literal, families = [$($family:ident),* $(,)?]) ),* $(,)? ) => {
        match $root {
            $(
                $crate::DataTypeRoot::$variant => &[ $( $crate::DataTypeFamily::$family ),* ],
            )*
        }
    };
}

macro_rules! name_from_registry {
    ( @args $root:expr; @entries $( ($variant:ident, $name:literal, families = [$($family:ident),* $(,)?]) ),* $(,)? ) => {
        match $root {
            $(
                $crate::DataTypeRoot::$variant => $name,
            )*
        }
    };
}

macro_rules! all_roots_from_registry {
    ( @entries $( ($variant:ident, $name:literal, families = [$($family:ident),* $(,)?]) ),* $(,)? ) => {
        [ $( $crate::DataTypeRoot::$variant ),* ]
    };
}
