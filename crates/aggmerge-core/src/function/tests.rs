use crate::function::{
    AggFunctionError, AggFunctionKind, DataTypeRule, InvalidParameterReason, PARAM_DELIMITER,
    UnknownAggFunctionError,
};
use aggmerge_primitives::{ALL_DATA_TYPE_ROOTS, DataType, DataTypeFamily, DataTypeRoot};
use proptest::prelude::*;

const CONCAT_KINDS: [AggFunctionKind; 2] = [AggFunctionKind::Listagg, AggFunctionKind::StringAgg];
const BOOL_KINDS: [AggFunctionKind; 2] = [AggFunctionKind::BoolAnd, AggFunctionKind::BoolOr];

fn sample_types() -> Vec<DataType> {
    vec![
        DataType::char(4),
        DataType::string(),
        DataType::boolean(),
        DataType::binary(16),
        DataType::bytes(),
        DataType::decimal(18, 4),
        DataType::tiny_int(),
        DataType::small_int(),
        DataType::int(),
        DataType::big_int(),
        DataType::float(),
        DataType::double(),
        DataType::date(),
        DataType::time(3),
        DataType::timestamp(6),
        DataType::timestamp_ltz(6),
        DataType::array(DataType::int()),
        DataType::map(DataType::string(), DataType::int()),
        DataType::row([("a", DataType::int())]),
    ]
}

// ----------------------------------------------------------------------
// Identifier codec
// ----------------------------------------------------------------------

#[test]
fn identifier_round_trips_for_every_kind() {
    for kind in AggFunctionKind::ALL {
        assert_eq!(
            AggFunctionKind::from_identifier(Some(kind.identifier())),
            Some(kind)
        );
        assert_eq!(kind.identifier(), kind.name().to_ascii_lowercase());
        assert_eq!(kind.to_string(), kind.identifier());
    }
}

#[test]
fn registry_descriptors_match_their_kind() {
    for kind in AggFunctionKind::ALL {
        let descriptor = kind.descriptor();
        assert_eq!(descriptor.kind, kind);
        assert_eq!(descriptor.identifier, descriptor.name.to_ascii_lowercase());
        assert!(
            descriptor
                .name
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b == b'_'),
            "catalog name {} must be upper-case ASCII",
            descriptor.name
        );
    }
}

#[test]
fn from_identifier_accepts_hyphen_underscore_and_mixed_case() {
    for spelling in [
        "last-value-ignore-nulls",
        "LAST_VALUE_IGNORE_NULLS",
        "Last_Value_Ignore_Nulls",
        "LAST-value_IGNORE-nulls",
        "  last_value_ignore_nulls\t",
    ] {
        assert_eq!(
            AggFunctionKind::parse(spelling),
            Some(AggFunctionKind::LastValueIgnoreNulls),
            "{spelling:?}"
        );
    }
}

#[test]
fn from_identifier_returns_none_for_missing_blank_or_unknown_names() {
    assert_eq!(AggFunctionKind::from_identifier(None), None);
    assert_eq!(AggFunctionKind::from_identifier(Some("")), None);
    assert_eq!(AggFunctionKind::from_identifier(Some("   ")), None);
    assert_eq!(AggFunctionKind::from_identifier(Some("not_a_function")), None);
    assert_eq!(AggFunctionKind::parse("sum_"), None);
    assert_eq!(AggFunctionKind::parse("s u m"), None);
}

#[test]
fn from_identifier_upper_cases_with_unicode_mapping() {
    // dotless i and long s both upper-case to ASCII letters
    assert_eq!(
        AggFunctionKind::parse("m\u{131}n"),
        Some(AggFunctionKind::Min)
    );
    assert_eq!(
        AggFunctionKind::parse("\u{17f}um"),
        Some(AggFunctionKind::Sum)
    );

    // dotted capital I has no ASCII upper-case form
    assert_eq!(AggFunctionKind::parse("m\u{130}n"), None);
}

#[test]
fn listagg_and_string_agg_stay_distinct_identities() {
    assert_eq!(AggFunctionKind::parse("listagg"), Some(AggFunctionKind::Listagg));
    assert_eq!(
        AggFunctionKind::parse("string-agg"),
        Some(AggFunctionKind::StringAgg)
    );
    assert_ne!(AggFunctionKind::Listagg, AggFunctionKind::StringAgg);
}

#[test]
fn from_str_is_strict() {
    assert_eq!("Bool-Or".parse::<AggFunctionKind>(), Ok(AggFunctionKind::BoolOr));

    let err = "median".parse::<AggFunctionKind>().unwrap_err();
    assert_eq!(
        err,
        UnknownAggFunctionError {
            name: "median".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown aggregation function 'median'");
}

#[test]
fn serde_uses_identifier_and_accepts_any_spelling() {
    let json = serde_json::to_string(&AggFunctionKind::FirstValueIgnoreNulls)
        .expect("kind should serialize");
    assert_eq!(json, "\"first_value_ignore_nulls\"");

    let decoded: AggFunctionKind =
        serde_json::from_str("\"FIRST-VALUE\"").expect("kind should deserialize");
    assert_eq!(decoded, AggFunctionKind::FirstValue);

    let err = serde_json::from_str::<AggFunctionKind>("\"avg\"").unwrap_err();
    assert!(err.to_string().contains("unknown aggregation function 'avg'"));
}

// ----------------------------------------------------------------------
// Parameter validation
// ----------------------------------------------------------------------

#[test]
fn unsupported_parameter_reports_the_actual_supported_set() {
    for kind in AggFunctionKind::ALL {
        let err = kind
            .validate_parameter("window", Some("10"))
            .expect_err("unknown parameter should be rejected");

        let AggFunctionError::InvalidParameter {
            kind: rejected_kind,
            parameter,
            reason: InvalidParameterReason::Unsupported { supported },
        } = err
        else {
            panic!("expected unsupported-parameter rejection for {kind}");
        };

        assert_eq!(rejected_kind, kind);
        assert_eq!(parameter, "window");
        assert_eq!(supported.as_slice(), kind.supported_parameters());
    }
}

#[test]
fn unsupported_parameter_message_renders_none_for_parameterless_kinds() {
    let err = AggFunctionKind::Sum
        .validate_parameter(PARAM_DELIMITER, Some(","))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "parameter 'delimiter' is not supported (supported parameters: none) for aggregation function 'sum'"
    );
}

#[test]
fn unsupported_parameter_message_lists_supported_names() {
    let err = AggFunctionKind::Listagg
        .validate_parameter("separator", Some(","))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "parameter 'separator' is not supported (supported parameters: [delimiter]) for aggregation function 'listagg'"
    );
}

#[test]
fn delimiter_must_be_present_and_non_empty() {
    for kind in CONCAT_KINDS {
        for value in [None, Some("")] {
            let err = kind
                .validate_parameter(PARAM_DELIMITER, value)
                .expect_err("empty delimiter should be rejected");

            assert_eq!(
                err,
                AggFunctionError::InvalidParameter {
                    kind,
                    parameter: PARAM_DELIMITER.to_string(),
                    reason: InvalidParameterReason::EmptyValue,
                }
            );
        }

        assert!(kind.validate_parameter(PARAM_DELIMITER, Some(";")).is_ok());
        assert!(kind.validate_parameter(PARAM_DELIMITER, Some(" ")).is_ok());
    }
}

#[test]
fn empty_delimiter_message_names_parameter_and_function() {
    let err = AggFunctionKind::StringAgg
        .validate_parameter(PARAM_DELIMITER, Some(""))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "parameter 'delimiter' must be a non-empty string for aggregation function 'string_agg'"
    );
}

// ----------------------------------------------------------------------
// Data type validation
// ----------------------------------------------------------------------

#[test]
fn sum_accepts_numeric_and_rejects_strings() {
    for data_type in [
        DataType::int(),
        DataType::decimal(10, 2),
        DataType::double().not_null(),
    ] {
        assert!(AggFunctionKind::Sum.validate_data_type(&data_type).is_ok());
    }

    let err = AggFunctionKind::Sum
        .validate_data_type(&DataType::string())
        .unwrap_err();

    assert_eq!(
        err,
        AggFunctionError::UnsupportedDataType {
            kind: AggFunctionKind::Sum,
            data_type: "STRING".to_string(),
            rule: DataTypeRule::Families(&[DataTypeFamily::Numeric]),
        }
    );
    assert_eq!(
        err.to_string(),
        "data type for sum column must be part of [NUMERIC] but was 'STRING'"
    );
}

#[test]
fn extrema_accept_strings_numbers_and_datetimes_only() {
    for kind in [AggFunctionKind::Max, AggFunctionKind::Min] {
        for data_type in [
            DataType::string(),
            DataType::char(1),
            DataType::small_int(),
            DataType::date(),
            DataType::timestamp_ltz(3),
        ] {
            assert!(kind.validate_data_type(&data_type).is_ok(), "{kind} {data_type}");
        }

        for data_type in [
            DataType::boolean(),
            DataType::bytes(),
            DataType::array(DataType::int()),
        ] {
            assert!(kind.validate_data_type(&data_type).is_err(), "{kind} {data_type}");
        }
    }
}

#[test]
fn value_selection_accepts_every_type() {
    for kind in [
        AggFunctionKind::LastValue,
        AggFunctionKind::LastValueIgnoreNulls,
        AggFunctionKind::FirstValue,
        AggFunctionKind::FirstValueIgnoreNulls,
    ] {
        assert!(kind.data_type_rule().accepts_all());
        for data_type in sample_types() {
            assert!(kind.validate_data_type(&data_type).is_ok(), "{kind} {data_type}");
        }
    }
}

#[test]
fn bool_kinds_validate_by_exact_root() {
    for kind in BOOL_KINDS {
        assert_eq!(
            kind.data_type_rule(),
            DataTypeRule::ExactRoot(DataTypeRoot::Boolean)
        );
        assert!(kind.validate_data_type(&DataType::boolean()).is_ok());
        assert!(kind.validate_data_type(&DataType::boolean().not_null()).is_ok());

        for data_type in sample_types()
            .into_iter()
            .filter(|data_type| data_type.root() != DataTypeRoot::Boolean)
        {
            let err = kind.validate_data_type(&data_type).unwrap_err();
            assert!(matches!(
                err,
                AggFunctionError::UnsupportedDataType { kind: k, .. } if k == kind
            ));
        }
    }
}

#[test]
fn bool_rejection_message_names_the_exact_type() {
    let err = AggFunctionKind::BoolAnd
        .validate_data_type(&DataType::int())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "data type for bool_and column must be 'BOOLEAN' but was 'INT'"
    );
}

#[test]
fn concat_kinds_share_rules() {
    let [listagg, string_agg] = CONCAT_KINDS;

    assert_eq!(
        listagg.supported_parameters(),
        string_agg.supported_parameters()
    );
    assert_eq!(listagg.data_type_rule(), string_agg.data_type_rule());

    for data_type in sample_types() {
        assert_eq!(
            listagg.validate_data_type(&data_type).is_ok(),
            string_agg.validate_data_type(&data_type).is_ok(),
            "{data_type}"
        );
    }
}

#[test]
fn only_bool_kinds_use_exact_root_rules() {
    for kind in AggFunctionKind::ALL {
        let exact = matches!(kind.data_type_rule(), DataTypeRule::ExactRoot(_));
        assert_eq!(exact, BOOL_KINDS.contains(&kind), "{kind}");

        if let DataTypeRule::Families(families) = kind.data_type_rule() {
            assert!(!families.is_empty(), "{kind} must declare at least one family");
        }
    }
}

#[test]
fn roots_validate_like_their_data_types() {
    for kind in AggFunctionKind::ALL {
        for root in ALL_DATA_TYPE_ROOTS {
            let by_root = kind.validate_data_type(&root).is_ok();
            let by_type = sample_types()
                .iter()
                .filter(|data_type| data_type.root() == root)
                .all(|data_type| kind.validate_data_type(data_type).is_ok() == by_root);

            assert!(by_type, "{kind} {root}");
        }
    }
}

// ----------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------

fn arb_kind() -> impl Strategy<Value = AggFunctionKind> {
    proptest::sample::select(AggFunctionKind::ALL.to_vec())
}

/// Rewrite an identifier with a random case per character and random
/// hyphen/underscore separators.
fn respell(identifier: &str, mask: &[bool]) -> String {
    identifier
        .chars()
        .zip(mask.iter().cycle())
        .enumerate()
        .map(|(i, (ch, flip))| match ch {
            '_' if *flip => '-',
            '_' => '_',
            _ if (i % 2 == 0) == *flip => ch.to_ascii_uppercase(),
            _ => ch,
        })
        .collect()
}

proptest! {
    #[test]
    fn respelled_identifiers_resolve_to_the_same_kind(
        kind in arb_kind(),
        mask in prop::collection::vec(any::<bool>(), 1..32),
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t]{0,3}",
    ) {
        let spelling = format!("{pad_left}{}{pad_right}", respell(kind.identifier(), &mask));

        prop_assert_eq!(AggFunctionKind::parse(&spelling), Some(kind));
    }

    #[test]
    fn unknown_names_never_error(name in "[a-z_\\-]{0,24}") {
        let resolved = AggFunctionKind::parse(&name);

        if let Some(kind) = resolved {
            prop_assert_eq!(
                kind.identifier(),
                name.trim().replace('-', "_").to_ascii_lowercase()
            );
        }
    }
}
