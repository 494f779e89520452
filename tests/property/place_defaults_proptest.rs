//! Property-based tests for place default substitution

use proptest::prelude::*;
use serde_json::{json, Value};

use rest_rant::shared::place::{PlaceFields, DEFAULT_CITY, DEFAULT_PIC, DEFAULT_STATE};

fn falsy_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!(false))),
        Just(Some(json!(0))),
        Just(Some(json!(""))),
    ]
}

proptest! {
    #[test]
    fn test_falsy_values_get_defaults(pic in falsy_value(), city in falsy_value(), state in falsy_value()) {
        let mut body = serde_json::Map::new();
        for (key, value) in [("pic", pic), ("city", city), ("state", state)] {
            if let Some(value) = value {
                body.insert(key.to_string(), value);
            }
        }

        let fields = PlaceFields::for_new_place(body).unwrap();
        prop_assert_eq!(fields.pic.as_deref(), Some(DEFAULT_PIC));
        prop_assert_eq!(fields.city.as_deref(), Some(DEFAULT_CITY));
        prop_assert_eq!(fields.state.as_deref(), Some(DEFAULT_STATE));
    }

    #[test]
    fn test_non_empty_strings_are_kept(city in "[a-zA-Z ]{1,24}") {
        let mut body = serde_json::Map::new();
        body.insert("city".to_string(), json!(city.clone()));

        let fields = PlaceFields::for_new_place(body).unwrap();
        prop_assert_eq!(fields.city, Some(city));
        prop_assert_eq!(fields.pic.as_deref(), Some(DEFAULT_PIC));
    }

    #[test]
    fn test_merge_only_touches_submitted_keys(name in "[a-z]{1,12}", founded in 1800i64..2030) {
        let mut original = serde_json::Map::new();
        original.insert("name".to_string(), json!("Original"));
        original.insert("cuisines".to_string(), json!("Thai"));
        let stored = PlaceFields::for_new_place(original).unwrap();

        let mut update = serde_json::Map::new();
        update.insert("name".to_string(), json!(name.clone()));
        update.insert("founded".to_string(), json!(founded));
        let merged = stored.merged_with(update).unwrap();

        prop_assert_eq!(merged.name, Some(name));
        prop_assert_eq!(merged.founded, Some(founded));
        prop_assert_eq!(merged.cuisines.as_deref(), Some("Thai"));
        prop_assert_eq!(merged.city, stored.city);
    }
}
