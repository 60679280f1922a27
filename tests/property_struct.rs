use proptest::prelude::*;
use sbor_schema::{s, Parsed, SborBody, SborError, SborValue};

const MAX_FIELDS: usize = 6;

fn string_node(field_name: Option<String>, value: &str) -> SborValue {
    SborValue {
        type_name: None,
        field_name,
        body: SborBody::String {
            value: value.to_string(),
        },
    }
}

fn tuple_node(fields: Vec<SborValue>) -> SborValue {
    SborValue {
        type_name: None,
        field_name: None,
        body: SborBody::Tuple { fields },
    }
}

fn field_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::hash_map("[a-z][a-z0-9_]{0,8}", "[a-z0-9 ]{0,12}", 1..MAX_FIELDS)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn struct_parse_ignores_physical_field_order(entries in field_entries().prop_shuffle()) {
        let mut declaration = entries.clone();
        declaration.sort();

        let schema = s::struct_of(
            declaration
                .iter()
                .map(|(name, _)| (name.clone(), s::string())),
        );

        let declared_order = tuple_node(
            declaration
                .iter()
                .map(|(name, value)| string_node(Some(name.clone()), value))
                .collect(),
        );
        let shuffled_order = tuple_node(
            entries
                .iter()
                .map(|(name, value)| string_node(Some(name.clone()), value))
                .collect(),
        );

        let baseline = schema.parse(&declared_order).expect("parse declared order");
        let shuffled = schema.parse(&shuffled_order).expect("parse shuffled order");
        prop_assert_eq!(baseline, shuffled);
    }

    #[test]
    fn undeclared_extra_fields_never_fail(
        entries in field_entries(),
        extras in prop::collection::vec(("[a-z][a-z0-9_]{0,8}", "[a-z0-9 ]{0,12}"), 0..4),
    ) {
        let schema = s::struct_of(
            entries
                .iter()
                .map(|(name, _)| (name.clone(), s::string())),
        );

        let declared: Vec<SborValue> = entries
            .iter()
            .map(|(name, value)| string_node(Some(name.clone()), value))
            .collect();
        // Extras sharing a declared name would shadow it; only genuinely
        // undeclared names exercise the permissiveness contract.
        let extras: Vec<SborValue> = extras
            .iter()
            .filter(|(name, _)| entries.iter().all(|(declared, _)| declared != name))
            .map(|(name, value)| string_node(Some(name.clone()), value))
            .collect();

        let baseline = schema
            .parse(&tuple_node(declared.clone()))
            .expect("parse without extras");

        let mut padded = extras.clone();
        padded.extend(declared.iter().cloned());
        padded.extend(extras.iter().cloned());
        let with_extras = schema
            .parse(&tuple_node(padded))
            .expect("parse with extras");

        prop_assert_eq!(baseline, with_extras);
    }

    #[test]
    fn decimal_digit_sequences_survive_verbatim(
        literal in "-?[0-9]{1,30}(\\.[0-9]{1,30})?",
    ) {
        let node = SborValue {
            type_name: None,
            field_name: None,
            body: SborBody::Decimal {
                value: literal.clone(),
            },
        };
        let parsed = s::decimal().parse(&node).expect("parse decimal");
        prop_assert_eq!(parsed.as_decimal(), Some(literal.as_str()));
    }

    #[test]
    fn number_round_trips_any_i64(value in any::<i64>()) {
        let node = SborValue {
            type_name: None,
            field_name: None,
            body: SborBody::I128 {
                value: value.to_string(),
            },
        };
        let parsed = s::number().parse(&node).expect("parse number");
        prop_assert_eq!(parsed.as_i64(), Some(value));
    }

    #[test]
    fn number_rejects_values_beyond_i64(value in any::<i128>()) {
        prop_assume!(i64::try_from(value).is_err());
        let node = SborValue {
            type_name: None,
            field_name: None,
            body: SborBody::I128 {
                value: value.to_string(),
            },
        };
        let err = s::number().parse(&node).expect_err("expected range error");
        match err {
            SborError::NumberOutOfRange { value: literal, .. } => {
                prop_assert_eq!(literal, value.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn successful_parse_mirrors_schema_shape(values in prop::collection::vec("[a-z]{0,8}", 0..5)) {
        let schema = s::array(s::tuple([s::string()]));
        let node = SborValue {
            type_name: None,
            field_name: None,
            body: SborBody::Array {
                element_kind: sbor_schema::Kind::Tuple,
                elements: values
                    .iter()
                    .map(|value| tuple_node(vec![string_node(None, value)]))
                    .collect(),
            },
        };
        let parsed = schema.parse(&node).expect("parse array of tuples");
        let items = parsed.as_array().expect("array output");
        prop_assert_eq!(items.len(), values.len());
        for (item, value) in items.iter().zip(&values) {
            let tuple = item.as_tuple().expect("tuple output");
            prop_assert_eq!(tuple.len(), 1);
            prop_assert_eq!(tuple[0].as_str(), Some(value.as_str()));
        }
    }
}
