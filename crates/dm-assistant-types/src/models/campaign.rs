//! Campaign model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A campaign as seen from the DM's side of the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier for the campaign
    pub id: Uuid,
    /// Campaign name shown in lists and headers
    pub name: String,
    /// Free-form pitch / synopsis
    pub description: String,
    /// Setting name ("Forgotten Realms", "Homebrew", ...)
    pub setting: String,
    /// Private DM notes, never shown to players
    #[serde(default)]
    pub dm_notes: String,
    /// Number of the session currently being played (0 before session one)
    pub current_session: u32,
    /// Whether the campaign is still being run
    pub is_active: bool,
    /// Aggregated content counters
    pub info: CampaignInfo,
    /// Workflow status
    pub status: CampaignStatus,
    /// Seats at the table
    pub player_count: u8,
    /// Characters currently marked active
    pub active_characters: u32,
    /// Average level across active characters
    pub average_level: f32,
    /// Timestamp when the campaign was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last modification
    pub updated_at: DateTime<Utc>,
    /// When the last session was played, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<DateTime<Utc>>,
}

/// Aggregated campaign content counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInfo {
    /// Sessions played so far
    pub total_sessions: u32,
    /// Characters ever created in the campaign
    pub total_characters: u32,
    /// NPCs in the campaign notebook
    pub total_npcs: u32,
    /// Locations in the campaign notebook
    pub total_locations: u32,
    /// Quests, open or closed
    pub total_quests: u32,
    /// Quests marked completed
    pub completed_quests: u32,
    /// Encounters prepared
    pub total_encounters: u32,
    /// Difficulty the encounters are balanced for
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
}

/// Campaign workflow status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    /// Campaign in planning phase
    Planning,
    /// Currently running
    Active,
    /// Temporarily paused
    OnHold,
    /// Campaign finished
    Completed,
    /// Old campaign, kept for reference
    Archived,
}

impl CampaignStatus {
    /// All statuses, in workflow order. Useful for building filter options.
    pub const fn all() -> [CampaignStatus; 5] {
        [
            Self::Planning,
            Self::Active,
            Self::OnHold,
            Self::Completed,
            Self::Archived,
        ]
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

/// Difficulty level used for encounter balancing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DifficultyLevel {
    /// Easy, story-focused
    Casual,
    /// Standard difficulty
    #[default]
    Normal,
    /// Challenging encounters
    Hard,
    /// High-risk campaign
    Deadly,
}

impl DifficultyLevel {
    /// All levels, mildest first. Useful for building select options.
    pub const fn all() -> [DifficultyLevel; 4] {
        [Self::Casual, Self::Normal, Self::Hard, Self::Deadly]
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Deadly => "Deadly",
        }
    }
}

/// Lightweight campaign projection for lists and pickers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    /// Unique identifier for the campaign
    pub id: Uuid,
    /// Campaign name
    pub name: String,
    /// Free-form pitch / synopsis
    pub description: String,
    /// Workflow status
    pub status: CampaignStatus,
    /// Number of the session currently being played
    pub current_session: u32,
    /// Characters currently marked active
    pub active_characters: u32,
    /// Average level across active characters
    pub average_level: f32,
    /// When the last session was played, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<DateTime<Utc>>,
    /// Timestamp when the campaign was created
    pub created_at: DateTime<Utc>,
    /// Whether the campaign is still being run
    pub is_active: bool,
}

/// Request to create a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    pub setting: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_notes: Option<String>,
    pub difficulty_level: DifficultyLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_count: Option<u8>,
}

/// Request to update an existing campaign. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Health indicator derived from campaign content and session recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Attention,
}

/// Result of a campaign health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignHealth {
    pub status: HealthStatus,
    /// Problems found, empty when healthy
    pub issues: Vec<String>,
}

impl Campaign {
    /// Check if sessions can currently be played.
    pub fn is_playable(&self) -> bool {
        self.is_active && matches!(self.status, CampaignStatus::Active | CampaignStatus::Planning)
    }

    /// Check if the campaign can still be edited.
    pub fn can_modify(&self) -> bool {
        !matches!(self.status, CampaignStatus::Completed | CampaignStatus::Archived)
    }

    /// Session counter for display, e.g. "Session 12".
    pub fn session_label(&self) -> String {
        format!("Session {}", self.current_session)
    }

    /// Quest completion ratio in percent, 0 when no quests exist.
    pub fn quest_progress(&self) -> u32 {
        if self.info.total_quests == 0 {
            return 0;
        }
        self.info.completed_quests * 100 / self.info.total_quests
    }

    /// One-line display name: "Name - Setting (Session N)".
    pub fn display_name(&self) -> String {
        format!("{} - {} ({})", self.name, self.setting, self.session_label())
    }

    /// Health check: missing content and stale campaigns raise issues.
    /// Up to two issues is a warning, more means the campaign needs
    /// attention.
    pub fn health(&self) -> CampaignHealth {
        let mut issues = Vec::new();

        if self.active_characters == 0 {
            issues.push("No active characters".to_string());
        }
        if self.info.total_quests == 0 {
            issues.push("No quests defined".to_string());
        }
        if self.info.total_npcs == 0 {
            issues.push("No NPCs created".to_string());
        }
        if let Some(last) = self.last_session_date {
            let days = (Utc::now() - last).num_days();
            if days > 30 {
                issues.push("Last session more than 30 days ago".to_string());
            }
        }

        let status = match issues.len() {
            0 => HealthStatus::Healthy,
            1 | 2 => HealthStatus::Warning,
            _ => HealthStatus::Attention,
        };
        CampaignHealth { status, issues }
    }

    /// Check if the health status warrants a badge in the UI.
    pub fn needs_attention(&self) -> bool {
        let health = self.health();
        health.status == HealthStatus::Attention || !health.issues.is_empty()
    }
}

/// Sort campaigns for list display: running campaigns first, then by most
/// recent session, then by creation date. Campaigns that never had a session
/// sort after those that did.
pub fn sort_by_activity(campaigns: &mut [Campaign]) {
    campaigns.sort_by(|a, b| {
        b.is_active
            .cmp(&a.is_active)
            .then_with(|| b.last_session_date.cmp(&a.last_session_date))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(name: &str, status: CampaignStatus, is_active: bool) -> Campaign {
        let now = Utc::now();
        Campaign {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            setting: "Homebrew".to_string(),
            dm_notes: String::new(),
            current_session: 3,
            is_active,
            info: CampaignInfo::default(),
            status,
            player_count: 4,
            active_characters: 4,
            average_level: 2.5,
            created_at: now,
            updated_at: now,
            last_session_date: None,
        }
    }

    #[test]
    fn test_playable_and_modifiable() {
        let running = sample("a", CampaignStatus::Active, true);
        let archived = sample("b", CampaignStatus::Archived, false);
        let paused = sample("c", CampaignStatus::OnHold, true);
        let finished = sample("d", CampaignStatus::Completed, false);

        assert!(running.is_playable());
        assert!(!paused.is_playable());
        assert!(!archived.is_playable());
        assert!(running.can_modify());
        assert!(paused.can_modify());
        assert!(!archived.can_modify());
        assert!(!finished.can_modify());
    }

    #[test]
    fn test_quest_progress() {
        let mut c = sample("a", CampaignStatus::Active, true);
        assert_eq!(c.quest_progress(), 0);

        c.info.total_quests = 8;
        c.info.completed_quests = 2;
        assert_eq!(c.quest_progress(), 25);
    }

    #[test]
    fn test_sort_by_activity() {
        let mut older = sample("older", CampaignStatus::Active, true);
        older.last_session_date = Some(Utc::now() - chrono::Duration::days(3));
        let mut newer = sample("newer", CampaignStatus::Active, true);
        newer.last_session_date = Some(Utc::now());
        let never_played = sample("never_played", CampaignStatus::Active, true);
        let inactive = sample("inactive", CampaignStatus::Completed, false);

        let mut all = vec![inactive, never_played, older, newer];
        sort_by_activity(&mut all);

        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older", "never_played", "inactive"]);
    }

    #[test]
    fn test_serde_camel_case() {
        let c = sample("Lost Mines", CampaignStatus::Planning, true);
        let json = serde_json::to_string(&c).unwrap();

        assert!(json.contains("\"currentSession\""));
        assert!(json.contains("\"dmNotes\""));
        assert!(json.contains("\"Planning\""));

        let back: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_health_escalates_with_issues() {
        let mut c = sample("a", CampaignStatus::Active, true);
        c.info.total_quests = 3;
        c.info.total_npcs = 2;
        c.last_session_date = Some(Utc::now() - chrono::Duration::days(2));
        assert_eq!(c.health().status, HealthStatus::Healthy);
        assert!(!c.needs_attention());

        c.active_characters = 0;
        c.info.total_quests = 0;
        assert_eq!(c.health().status, HealthStatus::Warning);
        assert!(c.needs_attention());

        c.info.total_npcs = 0;
        c.last_session_date = Some(Utc::now() - chrono::Duration::days(45));
        let health = c.health();
        assert_eq!(health.status, HealthStatus::Attention);
        assert_eq!(health.issues.len(), 4);
    }

    #[test]
    fn test_status_labels_cover_all() {
        for status in CampaignStatus::all() {
            assert!(!status.label().is_empty());
        }
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Normal);
    }
}
