//! Tests for payload construction and encoding.

use super::{Attributes, customer_payload, encode_form, encode_json, event_payload};
use serde_json::{Value, json};

fn attributes(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

mod customer {
    use super::*;

    #[test]
    fn payload_is_attributes_plus_email() {
        let payload = customer_payload("a@example.com", &attributes(json!({"plan": "pro"})));

        assert_eq!(
            Value::Object(payload),
            json!({"plan": "pro", "email": "a@example.com"})
        );
    }

    #[test]
    fn explicit_email_overwrites_attribute() {
        let payload = customer_payload(
            "new@example.com",
            &attributes(json!({"email": "old@example.com", "plan": "pro"})),
        );

        assert_eq!(payload["email"], "new@example.com");
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn empty_attributes_yield_email_only() {
        let payload = customer_payload("a@example.com", &Attributes::new());
        assert_eq!(Value::Object(payload), json!({"email": "a@example.com"}));
    }

    #[test]
    fn attributes_are_not_mutated() {
        let original = attributes(json!({"plan": "pro"}));
        let _ = customer_payload("a@example.com", &original);

        assert!(!original.contains_key("email"));
    }
}

mod event {
    use super::*;

    #[test]
    fn empty_metadata_omits_data() {
        let payload = event_payload("purchased", &Attributes::new());

        assert_eq!(Value::Object(payload), json!({"name": "purchased"}));
    }

    #[test]
    fn metadata_is_nested_under_data() {
        let payload = event_payload("purchased", &attributes(json!({"price": 23.45})));

        assert_eq!(
            Value::Object(payload),
            json!({"name": "purchased", "data": {"price": 23.45}})
        );
    }
}

mod form_encoding {
    use super::*;

    #[test]
    fn flat_payload_encodes_pairs_in_order() {
        let payload = attributes(json!({"plan": "pro", "email": "a@example.com"}));

        assert_eq!(encode_form(&payload), "plan=pro&email=a%40example.com");
    }

    #[test]
    fn spaces_encode_as_plus() {
        let payload = attributes(json!({"name": "first purchase"}));
        assert_eq!(encode_form(&payload), "name=first+purchase");
    }

    #[test]
    fn nested_object_uses_brackets() {
        let payload = event_payload("purchased", &attributes(json!({"sku": "A1", "qty": 2})));

        assert_eq!(
            encode_form(&payload),
            "name=purchased&data%5Bsku%5D=A1&data%5Bqty%5D=2"
        );
    }

    #[test]
    fn arrays_use_indices() {
        let payload = attributes(json!({"tags": ["a", "b"]}));
        assert_eq!(encode_form(&payload), "tags%5B0%5D=a&tags%5B1%5D=b");
    }

    #[test]
    fn booleans_encode_as_digits_and_nulls_are_skipped() {
        let payload = attributes(json!({"active": true, "banned": false, "note": null}));
        assert_eq!(encode_form(&payload), "active=1&banned=0");
    }

    #[test]
    fn empty_payload_encodes_to_empty_string() {
        assert_eq!(encode_form(&Attributes::new()), "");
    }
}

mod json_encoding {
    use super::*;

    #[test]
    fn encodes_payload_as_json_object() {
        let payload = customer_payload("a@example.com", &attributes(json!({"plan": "pro"})));

        let body = encode_json(&payload).unwrap();
        let decoded: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(decoded, json!({"plan": "pro", "email": "a@example.com"}));
    }
}
