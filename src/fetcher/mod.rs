//! The `fetcher` module retrieves messages from a remote endpoint.
//!
//! `MessageFetcher` issues a single GET through an injected `HttpTransport`,
//! decodes the HAL body and stamps every record with the endpoint's source
//! label. `ReqwestTransport` is the production transport; tests substitute
//! their own.

pub mod service;
pub mod transport;

pub use service::{MessageFetcher, MessageSource, fetch_all};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
