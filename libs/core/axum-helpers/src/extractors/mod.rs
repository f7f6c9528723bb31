//! Request extractors with the crate's error envelope as rejection.

pub mod validated_json;

pub use validated_json::ValidatedJson;
