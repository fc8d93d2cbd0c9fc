///
/// Aggregation Function Registry
///
/// Single source of truth for per-function catalog data.
///

// NOTE: LISTAGG and STRING_AGG are intentionally identical rows; they stay
// separate identities so the identifier a user wrote survives a round-trip.
// NOTE: BOOL_AND/BOOL_OR use an exact-root rule; BOOLEAN has no value family.
macro_rules! agg_function_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Sum,
                name = "SUM",
                identifier = "sum",
                parameters = [],
                rule = DataTypeRule::Families(&[DataTypeFamily::Numeric])
            ),
            (
                Product,
                name = "PRODUCT",
                identifier = "product",
                parameters = [],
                rule = DataTypeRule::Families(&[DataTypeFamily::Numeric])
            ),
            (
                Max,
                name = "MAX",
                identifier = "max",
                parameters = [],
                rule = DataTypeRule::Families(&[
                    DataTypeFamily::CharacterString,
                    DataTypeFamily::Numeric,
                    DataTypeFamily::Datetime,
                ])
            ),
            (
                Min,
                name = "MIN",
                identifier = "min",
                parameters = [],
                rule = DataTypeRule::Families(&[
                    DataTypeFamily::CharacterString,
                    DataTypeFamily::Numeric,
                    DataTypeFamily::Datetime,
                ])
            ),
            (
                LastValue,
                name = "LAST_VALUE",
                identifier = "last_value",
                parameters = [],
                rule = DataTypeRule::Families(&ALL_DATA_TYPE_FAMILIES)
            ),
            (
                LastValueIgnoreNulls,
                name = "LAST_VALUE_IGNORE_NULLS",
                identifier = "last_value_ignore_nulls",
                parameters = [],
                rule = DataTypeRule::Families(&ALL_DATA_TYPE_FAMILIES)
            ),
            (
                FirstValue,
                name = "FIRST_VALUE",
                identifier = "first_value",
                parameters = [],
                rule = DataTypeRule::Families(&ALL_DATA_TYPE_FAMILIES)
            ),
            (
                FirstValueIgnoreNulls,
                name = "FIRST_VALUE_IGNORE_NULLS",
                identifier = "first_value_ignore_nulls",
                parameters = [],
                rule = DataTypeRule::Families(&ALL_DATA_TYPE_FAMILIES)
            ),
            (
                Listagg,
                name = "LISTAGG",
                identifier = "listagg",
                parameters = [PARAM_DELIMITER],
                rule = DataTypeRule::Families(&[DataTypeFamily::CharacterString])
            ),
            (
                StringAgg,
                name = "STRING_AGG",
                identifier = "string_agg",
                parameters = [PARAM_DELIMITER],
                rule = DataTypeRule::Families(&[DataTypeFamily::CharacterString])
            ),
            (
                BoolAnd,
                name = "BOOL_AND",
                identifier = "bool_and",
                parameters = [],
                rule = DataTypeRule::ExactRoot(DataTypeRoot::Boolean)
            ),
            (
                BoolOr,
                name = "BOOL_OR",
                identifier = "bool_or",
                parameters = [],
                rule = DataTypeRule::ExactRoot(DataTypeRoot::Boolean)
            ),
        }
    };
}

macro_rules! agg_function_registry {
    ($macro:ident) => {
        agg_function_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        agg_function_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! descriptor_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, name = $name:literal, identifier = $identifier:literal, parameters = [$($param:expr),* $(,)?], rule = $rule:expr) ),* $(,)? ) => {
        match $kind {
            $(
                AggFunctionKind::$variant => AggFunctionDescriptor {
                    kind: AggFunctionKind::$variant,
                    name: $name,
                    identifier: $identifier,
                    parameters: &[ $( $param ),* ],
                    data_type_rule: $rule,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($variant:ident, name = $name:literal, identifier = $identifier:literal, parameters = [$($param:expr),* $(,)?], rule = $rule:expr) ),* $(,)? ) => {
        [ $( AggFunctionKind::$variant ),* ]
    };
}
