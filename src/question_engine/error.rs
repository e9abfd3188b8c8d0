//! Error types for the question engine.

use thiserror::Error;

/// Result type alias for question engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the engine boundary.
///
/// Topic generators themselves never fail; these cover malformed input
/// arriving from the persistence or configuration side.
#[derive(Debug, Error)]
pub enum Error {
    /// Difficulty tag outside easy/medium/hard
    #[error("Invalid difficulty: {0:?} (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    /// Slot handed to the materializer before it was stored
    #[error("Template slot at order {order} has no template_id")]
    MissingTemplateId { order: u32 },

    /// Versions are numbered from 1
    #[error("Invalid version number: {0}")]
    InvalidVersion(u32),

    /// `template_id * 1000 + version` does not fit in a u64
    #[error("Seed overflow for template {template_id}, version {version}")]
    SeedOverflow { template_id: u64, version: u32 },

    /// Blueprint failed validation
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    /// JSON decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDifficulty("expert".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid difficulty: \"expert\" (expected easy, medium or hard)"
        );
    }

    #[test]
    fn test_error_missing_template_id() {
        let err = Error::MissingTemplateId { order: 4 };
        assert_eq!(err.to_string(), "Template slot at order 4 has no template_id");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("Serialization error"));
    }
}
