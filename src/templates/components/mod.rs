pub mod property_card;
pub mod stats;

pub use property_card::property_card;
pub use stats::stats_bar;
