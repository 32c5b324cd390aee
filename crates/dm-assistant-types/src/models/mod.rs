//! Core domain models for DM Assistant.
//!
//! This module contains all data structures shared between the frontend and
//! the Tauri backend over the invoke bridge.

mod campaign;
mod character;
mod settings;

// Re-export all models
pub use campaign::{
    sort_by_activity, Campaign, CampaignHealth, CampaignInfo, CampaignStatus, CampaignSummary,
    CreateCampaignRequest, DifficultyLevel, HealthStatus, UpdateCampaignRequest,
};
pub use character::{
    Achievement, AchievementType, AddAchievementRequest, CharacterRelationship,
    CreateCharacterRequest, PlayerCharacter, RelationshipType, UpdateCharacterRequest,
    UpdateRelationshipRequest, MAX_LEVEL,
};
pub use settings::AppSettings;
