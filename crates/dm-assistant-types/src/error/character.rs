//! Character-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during character operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CharacterError {
    /// Character with given ID not found
    #[error("Character not found: {id}")]
    NotFound {
        /// Unique identifier of the missing character
        id: String,
    },

    /// Character does not belong to the given campaign
    #[error("Character {id} does not belong to campaign {campaign_id}")]
    WrongCampaign {
        /// Unique identifier of the character
        id: String,
        /// Campaign the caller expected the character to be in
        campaign_id: String,
    },

    /// Character level outside the 1..=20 range
    #[error("Level {level} out of range for character {id}")]
    LevelOutOfRange {
        /// Unique identifier of the character
        id: String,
        /// The rejected level value
        level: u8,
    },

    /// Character is retired and cannot be changed
    #[error("Character {id} is inactive")]
    Inactive {
        /// Unique identifier of the inactive character
        id: String,
    },

    /// Character validation error (e.g. empty name)
    #[error("Validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Character storage/filesystem error
    #[error("Character storage error: {message}")]
    StorageError {
        /// Description of the storage failure
        message: String,
    },
}

impl CharacterError {
    /// Check if retrying the operation could succeed.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::StorageError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transient() {
        let transient = CharacterError::StorageError { message: "disk full".to_string() };
        let permanent = CharacterError::NotFound { id: "x".to_string() };

        assert!(transient.is_transient());
        assert!(!permanent.is_transient());
    }
}
