//! IBGE localities layer: HTTP client, response records, and the fetch
//! manager that runs requests in the background.

pub mod client;
pub mod error;
pub mod manager;

#[cfg(test)]
mod testing;

pub use client::{CityRecord, GeoClient, StateRecord};
