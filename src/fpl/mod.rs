//! Fantasy Premier League API: fetcher, schema catalog and aggregates.

pub mod aggregate;
pub mod compute;
pub mod http;
pub mod types;

pub use http::FplClient;
