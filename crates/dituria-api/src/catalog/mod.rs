//! Client for the catalog HTTP API.

mod client;
mod error;
pub mod types;

pub use client::{CatalogClient, ResourceKind, DEFAULT_BASE_URL};
pub use error::CatalogError;
