//! # Data Module
//!
//! Interface to the ingestion side of the system: loading a fully
//! materialized match document and the crude expected-goals placeholder
//! ingestion layers fall back on. Vendor schema mapping happens upstream
//! and is not part of the core.

pub mod loader;
pub mod xg;

pub use loader::{load_match_json, parse_match_json};
pub use xg::estimate_xg;
