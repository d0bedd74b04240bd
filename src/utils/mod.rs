//! The `utils` module collects the pieces shared across `msgfeed`: the error
//! types returned by every data source and the tracing setup used by the
//! binary.

pub mod error;
pub mod logging;

pub use error::{FetchError, TransportError};

#[cfg(test)]
mod tests;
