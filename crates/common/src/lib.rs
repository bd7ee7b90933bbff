//! Common types for the discovery client
//!
//! This crate contains the shared error type and result alias used across
//! the client library and CLI components.

use thiserror::Error;

/// Errors that can occur while loading or navigating a discovery document
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown attribute `{name}` on resource `{resource}`")]
    UnknownAttribute { resource: String, name: String },

    #[error("Resource `{0}` is not callable; descend to a method first")]
    ResourceNotCallable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for discovery client operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_attribute_message_names_both_sides() {
        let err = DiscoveryError::UnknownAttribute {
            resource: "buckets".to_string(),
            name: "frobnicate".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("buckets"));
        assert!(msg.contains("frobnicate"));
    }

    #[test]
    fn test_not_callable_message() {
        let err = DiscoveryError::ResourceNotCallable("buckets".to_string());
        assert!(err.to_string().contains("not callable"));
    }
}
