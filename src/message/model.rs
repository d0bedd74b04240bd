use serde::{Deserialize, Serialize};

/// A single log-like record returned to callers.
///
/// All four fields are plain strings. `timestamp` is carried through as
/// received and never parsed.
///
/// # Fields
///
/// - `id` - Stable identifier, taken from the trailing segment of the
///   upstream self link (or given explicitly in fixture data).
/// - `timestamp` - ISO-8601 date-time string.
/// - `message` - Free text.
/// - `source` - Label of the endpoint that produced the record.
///
/// # Example
///
/// ```rust
/// let msg = msgfeed::message::Message {
///     id: "42".to_string(),
///     timestamp: "2020-01-01T00:00:00Z".to_string(),
///     message: "hello".to_string(),
///     source: "mongo".to_string(),
/// };
/// assert_eq!(msg.source, "mongo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub timestamp: String,
    pub message: String,
    pub source: String,
}
