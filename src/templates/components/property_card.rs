// templates/components/property_card.rs

use crate::domain::NormalizedListing;
use crate::report::{
    format_address, format_count, format_listed_date, format_phone, format_price, format_rooms,
};
use maud::{html, Markup};

pub fn property_card(listing: &NormalizedListing) -> Markup {
    html! {
        article class="property-card" {
            div class="property-image" { "🏠" }
            div class="property-details" {
                div class="property-price" { (format_price(listing.price())) }
                div class="property-address" { (format_address(listing)) }
                div class="property-features" {
                    span class="feature" { strong { (format_rooms(listing.get("bedrooms"))) } " beds" }
                    span class="feature" { strong { (format_rooms(listing.get("bathrooms"))) } " baths" }
                    span class="feature" { strong { (format_count(listing.number("squareFootage"))) } " sqft" }
                }
                (agent_info(listing))
                div class="property-meta" {
                    span class="property-type" {
                        (listing.text("propertyType").filter(|t| !t.is_empty()).unwrap_or("Residential"))
                    }
                    span { "Listed: " (format_listed_date(listing)) }
                }
            }
        }
    }
}

fn agent_info(listing: &NormalizedListing) -> Markup {
    let non_empty = |record: &str, field: &str| listing.contact(record, field).filter(|s| !s.is_empty());

    let agent_name = non_empty("agent", "name");
    let agent_phone = non_empty("agent", "phone");
    let agent_email = non_empty("agent", "email");
    let office_name = non_empty("office", "name");

    if agent_name.is_none() && agent_email.is_none() && office_name.is_none() {
        return html! {};
    }

    let mut lines: Vec<Markup> = Vec::new();
    if let Some(name) = agent_name {
        lines.push(html! {
            strong { (name) }
            @if let Some(phone) = agent_phone {
                " " a href={ "tel:" (phone) } { (format_phone(phone)) }
            }
        });
    }
    if let Some(email) = agent_email {
        lines.push(html! { a href={ "mailto:" (email) } { (email) } });
    }
    if let Some(office) = office_name {
        lines.push(html! { span class="office-name" { (office) } });
    }

    html! {
        div class="agent-info" {
            @for (i, line) in lines.into_iter().enumerate() {
                @if i > 0 { br; }
                (line)
            }
        }
    }
}
