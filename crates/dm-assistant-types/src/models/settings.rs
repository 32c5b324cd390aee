//! Application settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many recently opened campaigns are remembered.
const RECENT_CAMPAIGNS_LIMIT: usize = 5;

/// Application-wide settings, including the currently opened campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Campaign currently opened in the app, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_campaign_id: Option<Uuid>,
    /// Most recently opened campaigns, newest first
    pub recent_campaigns: Vec<Uuid>,
    /// Whether periodic backups are enabled
    pub auto_backup: bool,
    /// Hours between automatic backups
    pub backup_frequency_hours: u32,
    /// UI theme identifier ("dark", "light")
    pub theme: String,
    /// Timestamp when the settings were created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last modification
    pub updated_at: DateTime<Utc>,
}

impl AppSettings {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            current_campaign_id: None,
            recent_campaigns: Vec::new(),
            auto_backup: true,
            backup_frequency_hours: 24,
            theme: "dark".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Open a campaign: mark it current and move it to the front of the
    /// recents list.
    pub fn set_current_campaign(&mut self, campaign_id: Uuid) {
        self.current_campaign_id = Some(campaign_id);
        self.recent_campaigns.retain(|&id| id != campaign_id);
        self.recent_campaigns.insert(0, campaign_id);
        self.recent_campaigns.truncate(RECENT_CAMPAIGNS_LIMIT);
        self.updated_at = Utc::now();
    }

    /// Close the current campaign without touching the recents list.
    pub fn clear_current_campaign(&mut self) {
        self.current_campaign_id = None;
        self.updated_at = Utc::now();
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recents_deduplicate_and_truncate() {
        let mut settings = AppSettings::new();
        let ids: Vec<Uuid> = (0..7).map(|_| Uuid::new_v4()).collect();

        for &id in &ids {
            settings.set_current_campaign(id);
        }
        // Re-open the oldest remembered one, it should move to the front.
        settings.set_current_campaign(ids[2]);

        assert_eq!(settings.current_campaign_id, Some(ids[2]));
        assert_eq!(settings.recent_campaigns.len(), RECENT_CAMPAIGNS_LIMIT);
        assert_eq!(settings.recent_campaigns[0], ids[2]);
        assert_eq!(
            settings
                .recent_campaigns
                .iter()
                .filter(|&&id| id == ids[2])
                .count(),
            1
        );
    }

    #[test]
    fn test_clear_keeps_recents() {
        let mut settings = AppSettings::new();
        let id = Uuid::new_v4();
        settings.set_current_campaign(id);

        settings.clear_current_campaign();

        assert_eq!(settings.current_campaign_id, None);
        assert_eq!(settings.recent_campaigns, vec![id]);
    }
}
