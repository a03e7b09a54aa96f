//! Property tests for definition parsing.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use conveyor::models::RawDefinition;
use conveyor::parser::parse_definition;

/// Plain YAML-safe keys; `true`, `false` and `null` would parse as
/// non-string keys, which the parser rejects.
fn field_keys() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        proptest::string::string_regex("[a-z][a-zA-Z0-9]{0,11}")
            .unwrap()
            .prop_filter("must stay a string key", |k| {
                !matches!(k.as_str(), "true" | "false" | "null")
            }),
        0..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input text.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,512}") {
        let raw = RawDefinition::Text(text);
        let _ = parse_definition(Path::new("configs/ns/unit.s1.yaml"), &raw);
    }

    /// PROPERTY: Every extra top-level field survives into `fields`, and
    /// `version` never does.
    #[test]
    fn property_parse_keeps_every_field(keys in field_keys()) {
        let mut doc = String::from("version: \"1.0.0\"\n");
        for key in &keys {
            if key == "version" {
                continue;
            }
            doc.push_str(&format!("{}: value\n", key));
        }

        let raw = RawDefinition::Text(doc);
        let definition =
            parse_definition(Path::new("configs/ns/unit.s1.yaml"), &raw).unwrap();

        prop_assert_eq!(definition.version.as_str(), "1.0.0");
        for key in &keys {
            if key == "version" {
                continue;
            }
            prop_assert!(
                definition.fields.contains_key(key),
                "field '{}' was dropped",
                key
            );
        }
        prop_assert!(!definition.fields.contains_key("version"));
    }

    /// PROPERTY: A double-quoted version string round-trips exactly.
    #[test]
    fn property_quoted_version_round_trips(version in "[0-9a-zA-Z.+-]{1,20}") {
        let doc = format!("version: \"{}\"\n", version);
        let raw = RawDefinition::Text(doc);
        let definition =
            parse_definition(Path::new("configs/ns/unit.s1.yaml"), &raw).unwrap();

        prop_assert_eq!(&definition.version, &version);
    }
}
