use crate::report::{format_price, Summary};
use maud::{html, Markup};

pub fn stats_bar(summary: &Summary) -> Markup {
    html! {
        section class="stats" {
            div {
                strong id="total-listings" { (summary.total) }
                "Listings"
            }
            div {
                strong id="avg-price" {
                    @match summary.average_price {
                        Some(avg) => { (format_price(Some(avg))) }
                        None => { "--" }
                    }
                }
                "Average price"
            }
        }
    }
}
