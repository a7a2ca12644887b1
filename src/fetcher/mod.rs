mod client;
mod fetch_error;

pub use client::{ListingSource, RentcastClient};

#[cfg(test)]
pub use client::endpoint_url;
pub use fetch_error::FetchError;
