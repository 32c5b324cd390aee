//! State actions module
//!
//! Provides structured action handlers that avoid the closure capture issues
//! by using cloned state references.

use crate::app::AppState;
use crate::tauri::commands;
use dm_assistant_types::models::{
    AddAchievementRequest, Campaign, CreateCampaignRequest, CreateCharacterRequest,
    PlayerCharacter, UpdateCampaignRequest, UpdateCharacterRequest, UpdateRelationshipRequest,
};
use leptos::prelude::{GetUntracked, Set};
use leptos::task::spawn_local;
use uuid::Uuid;

/// Campaign-related actions
#[derive(Clone)]
pub struct CampaignActions {
    state: AppState,
}

impl CampaignActions {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Refresh the campaigns list from backend
    pub fn refresh_list(&self) {
        let s = self.state.clone();
        spawn_local(async move {
            if let Ok(campaigns) = commands::get_all_campaigns().await {
                s.campaigns.set(campaigns);
            }
        });
    }

    /// Create a campaign
    pub fn create(
        &self,
        req: CreateCampaignRequest,
        on_result: impl Fn(Result<Campaign, String>) + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            match commands::create_campaign(&req).await {
                Ok(campaign) => {
                    if let Ok(campaigns) = commands::get_all_campaigns().await {
                        s.campaigns.set(campaigns);
                    }
                    on_result(Ok(campaign));
                }
                Err(e) => on_result(Err(e)),
            }
        });
    }

    /// Update a campaign
    pub fn update(
        &self,
        campaign_id: Uuid,
        req: UpdateCampaignRequest,
        on_success: impl Fn() + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::update_campaign(campaign_id, &req).await.is_ok() {
                if let Ok(campaigns) = commands::get_all_campaigns().await {
                    s.campaigns.set(campaigns);
                }
                on_success();
            }
        });
    }

    /// Delete a campaign
    pub fn delete(&self, campaign_id: Uuid, on_success: impl Fn() + 'static) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::delete_campaign(campaign_id).await.is_ok() {
                if s.current_campaign_id.get_untracked() == Some(campaign_id) {
                    s.current_campaign_id.set(None);
                    s.characters.set(vec![]);
                }
                if let Ok(campaigns) = commands::get_all_campaigns().await {
                    s.campaigns.set(campaigns);
                }
                on_success();
            }
        });
    }

    /// Archive a campaign instead of deleting it
    pub fn archive(&self, campaign_id: Uuid, on_success: impl Fn() + 'static) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::archive_campaign(campaign_id).await.is_ok() {
                if let Ok(campaigns) = commands::get_all_campaigns().await {
                    s.campaigns.set(campaigns);
                }
                on_success();
            }
        });
    }

    /// Open a campaign: mark it current and load its characters
    pub fn open(&self, campaign_id: Uuid, on_success: impl Fn() + 'static) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::set_current_campaign(campaign_id).await.is_ok() {
                s.current_campaign_id.set(Some(campaign_id));
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
                on_success();
            }
        });
    }

    /// Close the current campaign
    pub fn close_current(&self) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::clear_current_campaign().await.is_ok() {
                s.current_campaign_id.set(None);
                s.characters.set(vec![]);
            }
        });
    }

    /// Start the next session in a campaign
    pub fn start_session(
        &self,
        campaign_id: Uuid,
        on_result: impl Fn(Result<Campaign, String>) + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            match commands::start_campaign_session(campaign_id).await {
                Ok(campaign) => {
                    if let Ok(campaigns) = commands::get_all_campaigns().await {
                        s.campaigns.set(campaigns);
                    }
                    on_result(Ok(campaign));
                }
                Err(e) => on_result(Err(e)),
            }
        });
    }
}

/// Character-related actions
#[derive(Clone)]
pub struct CharacterActions {
    state: AppState,
}

impl CharacterActions {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Reload characters of the current campaign
    pub fn refresh_list(&self) {
        let s = self.state.clone();
        spawn_local(async move {
            let Some(campaign_id) = s.current_campaign_id.get_untracked() else {
                return;
            };
            if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                s.characters.set(characters);
            }
        });
    }

    /// Create a character in the current campaign
    pub fn create(
        &self,
        req: CreateCharacterRequest,
        on_result: impl Fn(Result<PlayerCharacter, String>) + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            match commands::create_character(&req).await {
                Ok(character) => {
                    if let Ok(characters) =
                        commands::get_characters_by_campaign(req.campaign_id).await
                    {
                        s.characters.set(characters);
                    }
                    on_result(Ok(character));
                }
                Err(e) => on_result(Err(e)),
            }
        });
    }

    /// Update a character
    pub fn update(
        &self,
        campaign_id: Uuid,
        character_id: Uuid,
        req: UpdateCharacterRequest,
        on_success: impl Fn() + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::update_character(campaign_id, character_id, &req).await.is_ok() {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
                on_success();
            }
        });
    }

    /// Delete a character
    pub fn delete(&self, campaign_id: Uuid, character_id: Uuid, on_success: impl Fn() + 'static) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::delete_character(campaign_id, character_id).await.is_ok() {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
                on_success();
            }
        });
    }

    /// Record an achievement for a character
    pub fn add_achievement(
        &self,
        campaign_id: Uuid,
        req: AddAchievementRequest,
        on_success: impl Fn() + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::add_character_achievement(campaign_id, &req).await.is_ok() {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
                on_success();
            }
        });
    }

    /// Remove an achievement from a character
    pub fn remove_achievement(
        &self,
        campaign_id: Uuid,
        character_id: Uuid,
        achievement_id: Uuid,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::remove_character_achievement(campaign_id, character_id, achievement_id)
                .await
                .is_ok()
            {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
            }
        });
    }

    /// Create or update a relationship with an NPC
    pub fn update_relationship(
        &self,
        campaign_id: Uuid,
        req: UpdateRelationshipRequest,
        on_success: impl Fn() + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::update_character_relationship(campaign_id, &req).await.is_ok() {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
                on_success();
            }
        });
    }

    /// Remove a relationship with an NPC
    pub fn remove_relationship(&self, campaign_id: Uuid, character_id: Uuid, npc_id: Uuid) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::remove_character_relationship(campaign_id, character_id, npc_id)
                .await
                .is_ok()
            {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
            }
        });
    }

    /// Level up a character by one level
    pub fn level_up(
        &self,
        campaign_id: Uuid,
        character_id: Uuid,
        on_result: impl Fn(Result<PlayerCharacter, String>) + 'static,
    ) {
        let s = self.state.clone();
        spawn_local(async move {
            match commands::level_up_character(campaign_id, character_id).await {
                Ok(character) => {
                    if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await
                    {
                        s.characters.set(characters);
                    }
                    on_result(Ok(character));
                }
                Err(e) => on_result(Err(e)),
            }
        });
    }

    /// Toggle a character between active and retired
    pub fn toggle_active(&self, campaign_id: Uuid, character_id: Uuid) {
        let s = self.state.clone();
        spawn_local(async move {
            if commands::toggle_character_active(campaign_id, character_id).await.is_ok() {
                if let Ok(characters) = commands::get_characters_by_campaign(campaign_id).await {
                    s.characters.set(characters);
                }
            }
        });
    }
}
