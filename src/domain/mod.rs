pub mod fields;
pub mod listing;
pub mod transform;

pub use listing::{NormalizedListing, RawListing};
pub use transform::normalize;
