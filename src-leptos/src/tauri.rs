//! Tauri IPC bindings for Leptos
//!
//! This module provides type-safe wrappers around Tauri's invoke() function.

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// Call a Tauri command with typed arguments and return value.
pub async fn tauri_invoke<A, R>(cmd: &str, args: A) -> Result<R, String>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let args_js = serde_wasm_bindgen::to_value(&args)
        .map_err(|e| format!("Failed to serialize args: {}", e))?;

    let result = invoke(cmd, args_js).await;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to deserialize result: {}", e))
}

/// Call a Tauri command with no arguments.
pub async fn tauri_invoke_no_args<R>(cmd: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    tauri_invoke(cmd, serde_json::json!({})).await
}

// Re-export common command wrappers
pub mod commands {
    use super::*;
    use dm_assistant_types::models::{
        AddAchievementRequest, AppSettings, Campaign, CampaignSummary, CreateCampaignRequest,
        CreateCharacterRequest, PlayerCharacter, UpdateCampaignRequest, UpdateCharacterRequest,
        UpdateRelationshipRequest,
    };
    use uuid::Uuid;

    // ========== Campaigns ==========

    /// Create a new campaign
    pub async fn create_campaign(req: &CreateCampaignRequest) -> Result<Campaign, String> {
        tauri_invoke("create_campaign", serde_json::json!({ "req": req })).await
    }

    /// Get all campaigns
    pub async fn get_all_campaigns() -> Result<Vec<Campaign>, String> {
        tauri_invoke_no_args("get_all_campaigns").await
    }

    /// Get a single campaign by id
    pub async fn get_campaign(campaign_id: Uuid) -> Result<Option<Campaign>, String> {
        tauri_invoke("get_campaign", serde_json::json!({ "campaignId": campaign_id })).await
    }

    /// Get campaign summaries for list views
    pub async fn get_campaign_summaries() -> Result<Vec<CampaignSummary>, String> {
        tauri_invoke_no_args("get_campaign_summaries").await
    }

    /// Update campaign data
    pub async fn update_campaign(
        campaign_id: Uuid,
        req: &UpdateCampaignRequest,
    ) -> Result<Campaign, String> {
        tauri_invoke(
            "update_campaign",
            serde_json::json!({ "campaignId": campaign_id, "req": req }),
        )
        .await
    }

    /// Delete campaign
    pub async fn delete_campaign(campaign_id: Uuid) -> Result<bool, String> {
        tauri_invoke("delete_campaign", serde_json::json!({ "campaignId": campaign_id })).await
    }

    /// Archive campaign (safer than delete)
    pub async fn archive_campaign(campaign_id: Uuid) -> Result<Campaign, String> {
        tauri_invoke("archive_campaign", serde_json::json!({ "campaignId": campaign_id })).await
    }

    /// Set current active campaign
    pub async fn set_current_campaign(campaign_id: Uuid) -> Result<Campaign, String> {
        tauri_invoke("set_current_campaign", serde_json::json!({ "campaignId": campaign_id }))
            .await
    }

    /// Get current active campaign
    pub async fn get_current_campaign() -> Result<Option<Campaign>, String> {
        tauri_invoke_no_args("get_current_campaign").await
    }

    /// Clear current campaign
    pub async fn clear_current_campaign() -> Result<(), String> {
        tauri_invoke_no_args("clear_current_campaign").await
    }

    /// Get recently accessed campaigns
    pub async fn get_recent_campaigns() -> Result<Vec<Campaign>, String> {
        tauri_invoke_no_args("get_recent_campaigns").await
    }

    /// Start a new session in campaign
    pub async fn start_campaign_session(campaign_id: Uuid) -> Result<Campaign, String> {
        tauri_invoke("start_campaign_session", serde_json::json!({ "campaignId": campaign_id }))
            .await
    }

    // ========== Settings ==========

    /// Get app settings
    pub async fn get_app_settings() -> Result<AppSettings, String> {
        tauri_invoke_no_args("get_app_settings").await
    }

    /// Update app theme
    pub async fn update_app_theme(theme: &str) -> Result<AppSettings, String> {
        tauri_invoke("update_app_theme", serde_json::json!({ "theme": theme })).await
    }

    // ========== Characters ==========

    /// Create a new character
    pub async fn create_character(req: &CreateCharacterRequest) -> Result<PlayerCharacter, String> {
        tauri_invoke("create_character", serde_json::json!({ "req": req })).await
    }

    /// Get all characters for a campaign
    pub async fn get_characters_by_campaign(
        campaign_id: Uuid,
    ) -> Result<Vec<PlayerCharacter>, String> {
        tauri_invoke(
            "get_characters_by_campaign",
            serde_json::json!({ "campaignId": campaign_id }),
        )
        .await
    }

    /// Get only active characters for a campaign
    pub async fn get_active_characters_by_campaign(
        campaign_id: Uuid,
    ) -> Result<Vec<PlayerCharacter>, String> {
        tauri_invoke(
            "get_active_characters_by_campaign",
            serde_json::json!({ "campaignId": campaign_id }),
        )
        .await
    }

    /// Update character data
    pub async fn update_character(
        campaign_id: Uuid,
        character_id: Uuid,
        req: &UpdateCharacterRequest,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "update_character_with_campaign",
            serde_json::json!({
                "campaignId": campaign_id,
                "characterId": character_id,
                "req": req
            }),
        )
        .await
    }

    /// Delete character
    pub async fn delete_character(campaign_id: Uuid, character_id: Uuid) -> Result<bool, String> {
        tauri_invoke(
            "delete_character",
            serde_json::json!({ "campaignId": campaign_id, "characterId": character_id }),
        )
        .await
    }

    /// Add achievement to character
    pub async fn add_character_achievement(
        campaign_id: Uuid,
        req: &AddAchievementRequest,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "add_character_achievement",
            serde_json::json!({ "campaignId": campaign_id, "req": req }),
        )
        .await
    }

    /// Remove achievement from character
    pub async fn remove_character_achievement(
        campaign_id: Uuid,
        character_id: Uuid,
        achievement_id: Uuid,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "remove_character_achievement",
            serde_json::json!({
                "campaignId": campaign_id,
                "characterId": character_id,
                "achievementId": achievement_id
            }),
        )
        .await
    }

    /// Update or create relationship with NPC
    pub async fn update_character_relationship(
        campaign_id: Uuid,
        req: &UpdateRelationshipRequest,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "update_character_relationship",
            serde_json::json!({ "campaignId": campaign_id, "req": req }),
        )
        .await
    }

    /// Remove relationship with NPC
    pub async fn remove_character_relationship(
        campaign_id: Uuid,
        character_id: Uuid,
        npc_id: Uuid,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "remove_character_relationship",
            serde_json::json!({
                "campaignId": campaign_id,
                "characterId": character_id,
                "npcId": npc_id
            }),
        )
        .await
    }

    /// Level up character by one level
    pub async fn level_up_character(
        campaign_id: Uuid,
        character_id: Uuid,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "level_up_character",
            serde_json::json!({ "campaignId": campaign_id, "characterId": character_id }),
        )
        .await
    }

    /// Toggle character active status
    pub async fn toggle_character_active(
        campaign_id: Uuid,
        character_id: Uuid,
    ) -> Result<PlayerCharacter, String> {
        tauri_invoke(
            "toggle_character_active",
            serde_json::json!({ "campaignId": campaign_id, "characterId": character_id }),
        )
        .await
    }
}
