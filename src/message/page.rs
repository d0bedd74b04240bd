use serde::Deserialize;

use crate::message::Message;

/// Body returned by the message endpoint.
///
/// A missing or null `_embedded` wrapper, or a missing or null `messages`,
/// decodes as an empty page.
#[derive(Debug, Default, Deserialize)]
pub struct MessagePage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub messages: Option<Vec<RawMessage>>,
}

/// One upstream record. Any `source` or `id` sent by the server is ignored.
#[derive(Debug, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "_links")]
    pub links: Links,
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Deserialize)]
pub struct Link {
    pub href: String,
}

impl RawMessage {
    /// Last `/`-delimited segment of the self link.
    pub fn id(&self) -> &str {
        self.links
            .self_link
            .href
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// Normalizes the record, stamping it with `source`.
    pub fn into_message(self, source: &str) -> Message {
        Message {
            id: self.id().to_string(),
            timestamp: self.timestamp,
            message: self.message,
            source: source.to_string(),
        }
    }
}

impl MessagePage {
    /// Normalizes every embedded record in upstream order.
    pub fn into_messages(self, source: &str) -> Vec<Message> {
        self.embedded
            .and_then(|embedded| embedded.messages)
            .unwrap_or_default()
            .into_iter()
            .map(|raw| raw.into_message(source))
            .collect()
    }
}
