//! Typed error definitions for DM Assistant.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** across the Tauri command boundary via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod campaign;
mod character;

pub use campaign::CampaignError;
pub use character::CharacterError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when you need a single error type that can represent
/// any DM Assistant error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a campaign-related error
    #[error("Campaign error: {0}")]
    Campaign(#[from] CampaignError),

    /// Wraps a character-related error
    #[error("Character error: {0}")]
    Character(#[from] CharacterError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Campaign(CampaignError::NotFound { id: "camp-42".to_string() });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Campaign"));
        assert!(json.contains("camp-42"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = CharacterError::LevelOutOfRange { id: "pc-1".to_string(), level: 21 };

        let msg = format!("{}", err);
        assert!(msg.contains("pc-1"));
        assert!(msg.contains("21"));
    }
}
