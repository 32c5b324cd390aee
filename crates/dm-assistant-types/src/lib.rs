//! # DM Assistant Types
//!
//! Core domain models and error definitions for DM Assistant.
//!
//! This crate is the shared vocabulary between the Leptos frontend and the
//! Tauri backend:
//!
//! - **`error`** - Typed error hierarchy for campaign and character operations
//! - **`models`** - Domain models (Campaign, PlayerCharacter, AppSettings)
//!
//! All types are designed to be:
//! - **Serializable** via serde for IPC across the invoke bridge
//! - **Clone** for cheap sharing into closures and signals
//! - **PartialEq** for testing and signal change detection

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{CampaignError, CharacterError, Result, TypedError};

// Re-export core model types
pub use models::{
    Achievement, AchievementType, AppSettings, Campaign, CampaignInfo, CampaignStatus,
    CampaignSummary, CharacterRelationship, DifficultyLevel, PlayerCharacter, RelationshipType,
};
