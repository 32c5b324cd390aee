//! Campaign-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during campaign operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CampaignError {
    /// Campaign with given ID not found
    #[error("Campaign not found: {id}")]
    NotFound {
        /// Unique identifier of the missing campaign
        id: String,
    },

    /// Campaign cannot host sessions (archived, completed or inactive)
    #[error("Campaign {id} is not playable")]
    NotPlayable {
        /// Unique identifier of the campaign
        id: String,
    },

    /// Campaign is archived and cannot be modified
    #[error("Campaign {id} is archived")]
    Archived {
        /// Unique identifier of the archived campaign
        id: String,
    },

    /// Campaign with the same ID already exists
    #[error("Campaign already exists: {id}")]
    AlreadyExists {
        /// Unique identifier of the duplicate campaign
        id: String,
    },

    /// Campaign validation error (e.g. empty name)
    #[error("Validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Campaign storage/filesystem error
    #[error("Campaign storage error: {message}")]
    StorageError {
        /// Description of the storage failure
        message: String,
    },
}

impl CampaignError {
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
        let transient = CampaignError::StorageError { message: "disk full".to_string() };
        let permanent = CampaignError::Archived { id: "x".to_string() };

        assert!(transient.is_transient());
        assert!(!permanent.is_transient());
    }
}
