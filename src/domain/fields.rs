// src/domain/fields.rs

//! The snapshot schema as data: each output key, where it is read from, and
//! what it falls back to. Output keys are emitted in table order.

/// Search-region value used when a listing omits its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionField {
    City,
    State,
}

#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Input value, or `null` when the key is absent.
    Field(&'static str),
    /// Input value when the key is present (even if `null`), otherwise the
    /// search region's value.
    FieldOr(&'static str, RegionField),
    /// First input value if truthy, otherwise whatever the second key holds.
    FirstTruthy(&'static str, &'static str),
    /// Sub-record read from a nested object. A missing, falsy or non-object
    /// parent reads as `{}`.
    Nested(&'static str, &'static [FieldRule]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub key: &'static str,
    pub source: Source,
}

const fn field(key: &'static str) -> FieldRule {
    FieldRule {
        key,
        source: Source::Field(key),
    }
}

pub const AGENT_FIELDS: &[FieldRule] = &[field("name"), field("phone"), field("email")];

pub const OFFICE_FIELDS: &[FieldRule] = &[field("name"), field("phone")];

pub const LISTING_FIELDS: &[FieldRule] = &[
    field("id"),
    FieldRule {
        key: "addressLine1",
        source: Source::FirstTruthy("addressLine1", "formattedAddress"),
    },
    FieldRule {
        key: "city",
        source: Source::FieldOr("city", RegionField::City),
    },
    FieldRule {
        key: "state",
        source: Source::FieldOr("state", RegionField::State),
    },
    field("zipCode"),
    field("price"),
    field("bedrooms"),
    field("bathrooms"),
    field("squareFootage"),
    field("propertyType"),
    field("listedDate"),
    field("daysOnMarket"),
    field("latitude"),
    field("longitude"),
    FieldRule {
        key: "agent",
        source: Source::Nested("listingAgent", AGENT_FIELDS),
    },
    FieldRule {
        key: "office",
        source: Source::Nested("listingOffice", OFFICE_FIELDS),
    },
];
