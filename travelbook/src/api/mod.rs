//! HTTP client for the travel booking backend.

mod client;
mod error;
mod filters;

pub use client::ApiClient;
pub use error::ApiError;
pub use filters::TravelFilters;
