//! # msgfeed
//!
//! `msgfeed` fetches log-like "messages" from HAL-style HTTP endpoints and
//! normalizes them into flat records stamped with the label of the endpoint
//! they came from. A bundled fixture dataset can be served instead in demo
//! mode.
//!
//! ## Core Modules
//!
//! - `config`: Loads endpoint, fetcher and logging settings from file and environment.
//! - `fetcher`: Issues the GET request through a pluggable transport and normalizes the body.
//! - `fixture`: Serves the demo dataset from a JSON fixture file.
//! - `message`: The `Message` record and the upstream response schema.
//! - `utils`: Error types and logging setup.

pub mod config;
pub mod fetcher;
pub mod fixture;
pub mod message;
pub mod utils;
