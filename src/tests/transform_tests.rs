// src/tests/transform_tests.rs

use crate::config::Region;
use crate::domain::fields::LISTING_FIELDS;
use crate::domain::transform::is_truthy;
use crate::domain::{normalize, RawListing};
use serde_json::{json, Value};

fn raw(value: Value) -> RawListing {
    RawListing::from_value(value)
}

fn region() -> Region {
    Region::madison()
}

#[test]
fn empty_record_gets_every_key() {
    let listing = normalize(&raw(json!({})), &region());

    assert_eq!(
        listing.as_value(),
        json!({
            "id": null,
            "addressLine1": null,
            "city": "Madison",
            "state": "WI",
            "zipCode": null,
            "price": null,
            "bedrooms": null,
            "bathrooms": null,
            "squareFootage": null,
            "propertyType": null,
            "listedDate": null,
            "daysOnMarket": null,
            "latitude": null,
            "longitude": null,
            "agent": { "name": null, "phone": null, "email": null },
            "office": { "name": null, "phone": null }
        })
    );
}

#[test]
fn keys_come_out_in_schema_order() {
    let listing = normalize(&raw(json!({ "price": 1, "id": "x" })), &region());
    let keys: Vec<&str> = listing.keys().collect();
    let expected: Vec<&str> = LISTING_FIELDS.iter().map(|rule| rule.key).collect();

    assert_eq!(keys, expected);
}

#[test]
fn missing_agent_becomes_null_sub_record() {
    let listing = normalize(&raw(json!({ "id": "A1" })), &region());

    assert_eq!(
        listing.get("agent"),
        Some(&json!({ "name": null, "phone": null, "email": null }))
    );
    assert_eq!(
        listing.get("office"),
        Some(&json!({ "name": null, "phone": null }))
    );
}

#[test]
fn agent_and_office_are_flattened() {
    let listing = normalize(
        &raw(json!({
            "listingAgent": {
                "name": "Pat Realtor",
                "phone": "6085550134",
                "website": "https://example.com"
            },
            "listingOffice": { "name": "Lakeside Realty", "email": "office@example.com" }
        })),
        &region(),
    );

    assert_eq!(
        listing.get("agent"),
        Some(&json!({ "name": "Pat Realtor", "phone": "6085550134", "email": null }))
    );
    assert_eq!(
        listing.get("office"),
        Some(&json!({ "name": "Lakeside Realty", "phone": null }))
    );
}

#[test]
fn null_or_malformed_agent_reads_as_empty() {
    for agent in [json!(null), json!("Pat"), json!([1, 2]), json!({})] {
        let listing = normalize(&raw(json!({ "listingAgent": agent })), &region());
        assert_eq!(
            listing.get("agent"),
            Some(&json!({ "name": null, "phone": null, "email": null }))
        );
    }
}

#[test]
fn address_falls_back_to_formatted_address() {
    let formatted = "123 Main St, Madison, WI 53703";

    let missing = normalize(&raw(json!({ "formattedAddress": formatted })), &region());
    assert_eq!(missing.text("addressLine1"), Some(formatted));

    let blank = normalize(
        &raw(json!({ "addressLine1": "", "formattedAddress": formatted })),
        &region(),
    );
    assert_eq!(blank.text("addressLine1"), Some(formatted));

    let present = normalize(
        &raw(json!({ "addressLine1": "123 Main St", "formattedAddress": formatted })),
        &region(),
    );
    assert_eq!(present.text("addressLine1"), Some("123 Main St"));
}

#[test]
fn blank_address_without_fallback_is_null() {
    let listing = normalize(&raw(json!({ "addressLine1": "" })), &region());
    assert_eq!(listing.get("addressLine1"), Some(&Value::Null));
}

#[test]
fn region_only_fills_absent_city_and_state() {
    let own = normalize(&raw(json!({ "city": "Verona", "state": "WI" })), &region());
    assert_eq!(own.text("city"), Some("Verona"));

    // Present-but-null is kept as null.
    let explicit_null = normalize(&raw(json!({ "city": null })), &region());
    assert_eq!(explicit_null.get("city"), Some(&Value::Null));
    assert_eq!(explicit_null.text("state"), Some("WI"));
}

#[test]
fn values_pass_through_without_coercion() {
    let listing = normalize(
        &raw(json!({
            "price": -5,
            "bedrooms": "three",
            "bathrooms": 2.5,
            "latitude": 43.07,
            "daysOnMarket": 0,
            "propertyType": ["Condo"]
        })),
        &region(),
    );

    assert_eq!(listing.get("price"), Some(&json!(-5)));
    assert_eq!(listing.get("bedrooms"), Some(&json!("three")));
    assert_eq!(listing.get("bathrooms"), Some(&json!(2.5)));
    assert_eq!(listing.get("latitude"), Some(&json!(43.07)));
    assert_eq!(listing.get("daysOnMarket"), Some(&json!(0)));
    assert_eq!(listing.get("propertyType"), Some(&json!(["Condo"])));
}

#[test]
fn non_object_input_is_an_empty_record() {
    let from_string = normalize(&raw(json!("not a listing")), &region());
    let from_empty = normalize(&raw(json!({})), &region());
    assert_eq!(from_string, from_empty);
}

#[test]
fn normalize_is_deterministic() {
    let input = raw(json!({
        "id": "B2",
        "formattedAddress": "9 Lake St",
        "listingAgent": { "name": "Sam" }
    }));

    assert_eq!(normalize(&input, &region()), normalize(&input, &region()));
}

#[test]
fn canned_listing_matches_expected_record() {
    let listing = normalize(&raw(json!({ "id": "A1", "price": 350000 })), &region());

    assert_eq!(
        listing.as_value(),
        json!({
            "id": "A1",
            "addressLine1": null,
            "city": "Madison",
            "state": "WI",
            "zipCode": null,
            "price": 350000,
            "bedrooms": null,
            "bathrooms": null,
            "squareFootage": null,
            "propertyType": null,
            "listedDate": null,
            "daysOnMarket": null,
            "latitude": null,
            "longitude": null,
            "agent": { "name": null, "phone": null, "email": null },
            "office": { "name": null, "phone": null }
        })
    );
}

#[test]
fn truthiness_follows_json_emptiness() {
    for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
        assert!(!is_truthy(&falsy), "{falsy} should be falsy");
    }
    for truthy in [json!(true), json!(1), json!("x"), json!([0]), json!({ "a": null })] {
        assert!(is_truthy(&truthy), "{truthy} should be truthy");
    }
}

