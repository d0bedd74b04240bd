//! The `message` module defines the records served to callers and the
//! HAL-style response shape they are decoded from.
//!
//! `Message` is the normalized record. `MessagePage` models the upstream body
//! (`_embedded.messages[]._links.self.href`) with defaults for the optional
//! wrappers, so a malformed body fails during decoding instead of later.

pub mod model;
pub mod page;

pub use model::Message;
pub use page::MessagePage;
