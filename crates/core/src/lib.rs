//! Core types for disaster-relief
//!
//! Domain records, CSV ingestion and the needs heuristic shared by the
//! storage, service, HTTP and CLI crates.

mod constants;
mod disaster;
mod env_config;
mod error;
pub mod ingest;
mod prediction;
mod region;

pub use constants::*;
pub use disaster::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use ingest::read_disasters;
pub use prediction::*;
pub use region::*;
