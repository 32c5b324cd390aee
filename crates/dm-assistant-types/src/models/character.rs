//! Player character model, from the DM's perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum character level supported by the ruleset.
pub const MAX_LEVEL: u8 = 20;

/// A player character tracked inside a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCharacter {
    /// Unique identifier for the character
    pub id: Uuid,
    /// Campaign this character belongs to
    pub campaign_id: Uuid,
    /// Character name
    pub name: String,
    /// Race ("Elf", "Half-Orc", ...)
    pub race: String,
    /// Class ("Wizard", "Fighter", ...)
    pub class: String,
    /// Current level, 1 to [`MAX_LEVEL`]
    pub level: u8,
    /// Maximum hit points
    pub max_hp: u16,
    /// Backstory and description
    pub background: String,
    /// Moral alignment ("Chaotic Good", ...)
    #[serde(default)]
    pub alignment: String,
    /// Notable moments in the character's story
    pub achievements: Vec<Achievement>,
    /// Relationships with NPCs
    pub relationships: Vec<CharacterRelationship>,
    /// Private DM notes about the character
    pub notes: String,
    /// Whether the character is still played in the campaign
    pub is_active: bool,
    /// Timestamp when the character was created
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last modification
    pub updated_at: DateTime<Utc>,
}

/// A significant moment in a character's story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Unique identifier for the achievement
    pub id: Uuid,
    /// Short title
    pub title: String,
    /// What happened
    pub description: String,
    /// Related quest, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_id: Option<Uuid>,
    /// Session in which it was earned, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date: Option<DateTime<Utc>>,
    /// Category
    pub achievement_type: AchievementType,
    /// Timestamp when the achievement was recorded
    pub created_at: DateTime<Utc>,
}

/// Achievement categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AchievementType {
    QuestCompleted,
    PuzzleSolved,
    SocialInteraction,
    CombatVictory,
    Discovery,
    Roleplay,
    /// Free-form category chosen by the DM
    Custom(String),
}

impl AchievementType {
    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::QuestCompleted => "Quest Completed",
            Self::PuzzleSolved => "Puzzle Solved",
            Self::SocialInteraction => "Social Interaction",
            Self::CombatVictory => "Combat Victory",
            Self::Discovery => "Discovery",
            Self::Roleplay => "Roleplay",
            Self::Custom(name) => name,
        }
    }
}

/// Relationship between a character and an NPC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRelationship {
    /// Unique identifier for the relationship
    pub id: Uuid,
    /// Character side of the relationship
    pub character_id: Uuid,
    /// NPC side of the relationship
    pub npc_id: Uuid,
    /// How the character and the NPC relate
    pub relationship_type: RelationshipType,
    /// Context about the relationship
    pub notes: String,
    /// Last time the two interacted, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction: Option<DateTime<Utc>>,
    /// Timestamp when the relationship was recorded
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last modification
    pub updated_at: DateTime<Utc>,
}

/// Relationship states between a character and an NPC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    Neutral,
    Friendly,
    Hostile,
    Suspicious,
    Romantic,
    Ally,
    Enemy,
    Respected,
    Feared,
}

impl RelationshipType {
    /// All relationship states. Useful for building select options.
    pub const fn all() -> [RelationshipType; 9] {
        [
            Self::Neutral,
            Self::Friendly,
            Self::Hostile,
            Self::Suspicious,
            Self::Romantic,
            Self::Ally,
            Self::Enemy,
            Self::Respected,
            Self::Feared,
        ]
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Friendly => "Friendly",
            Self::Hostile => "Hostile",
            Self::Suspicious => "Suspicious",
            Self::Romantic => "Romantic",
            Self::Ally => "Ally",
            Self::Enemy => "Enemy",
            Self::Respected => "Respected",
            Self::Feared => "Feared",
        }
    }
}

/// Request to create a new character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub campaign_id: Uuid,
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u8,
    pub max_hp: u16,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request to update a character. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request to add an achievement to a character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddAchievementRequest {
    pub character_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date: Option<DateTime<Utc>>,
    pub achievement_type: AchievementType,
}

/// Request to create or update a relationship with an NPC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelationshipRequest {
    pub character_id: Uuid,
    pub npc_id: Uuid,
    pub relationship_type: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlayerCharacter {
    /// Create a new character from a request.
    pub fn new(req: CreateCharacterRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            campaign_id: req.campaign_id,
            name: req.name,
            race: req.race,
            class: req.class,
            level: req.level,
            max_hp: req.max_hp,
            background: req.background,
            alignment: req.alignment.unwrap_or_default(),
            achievements: Vec::new(),
            relationships: Vec::new(),
            notes: req.notes.unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update request.
    pub fn update(&mut self, req: UpdateCharacterRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(race) = req.race {
            self.race = race;
        }
        if let Some(class) = req.class {
            self.class = class;
        }
        if let Some(level) = req.level {
            self.level = level;
        }
        if let Some(max_hp) = req.max_hp {
            self.max_hp = max_hp;
        }
        if let Some(background) = req.background {
            self.background = background;
        }
        if let Some(alignment) = req.alignment {
            self.alignment = alignment;
        }
        if let Some(notes) = req.notes {
            self.notes = notes;
        }
        if let Some(is_active) = req.is_active {
            self.is_active = is_active;
        }

        self.updated_at = Utc::now();
    }

    /// Check if the character may gain a level.
    pub fn can_level_up(&self) -> bool {
        self.is_active && self.level < MAX_LEVEL
    }

    /// One-line stats for display, e.g. "Level 5 Elf Wizard".
    pub fn stats_label(&self) -> String {
        format!("Level {} {} {}", self.level, self.race, self.class)
    }

    /// Record an achievement.
    pub fn add_achievement(&mut self, req: AddAchievementRequest) {
        let now = Utc::now();
        self.achievements.push(Achievement {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            quest_id: req.quest_id,
            session_date: req.session_date,
            achievement_type: req.achievement_type,
            created_at: now,
        });
        self.updated_at = now;
    }

    /// Remove an achievement by id. Unknown ids are ignored.
    pub fn remove_achievement(&mut self, achievement_id: Uuid) {
        self.achievements.retain(|a| a.id != achievement_id);
        self.updated_at = Utc::now();
    }

    /// Achievements, most recent first.
    pub fn achievements_sorted(&self) -> Vec<&Achievement> {
        let mut achievements: Vec<&Achievement> = self.achievements.iter().collect();
        achievements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        achievements
    }

    /// Create or update the relationship with an NPC. At most one
    /// relationship per NPC is kept.
    pub fn update_relationship(&mut self, req: UpdateRelationshipRequest) {
        let now = Utc::now();
        if let Some(rel) = self.relationships.iter_mut().find(|r| r.npc_id == req.npc_id) {
            rel.relationship_type = req.relationship_type;
            if let Some(notes) = req.notes {
                rel.notes = notes;
            }
            rel.last_interaction = Some(now);
            rel.updated_at = now;
        } else {
            self.relationships.push(CharacterRelationship {
                id: Uuid::new_v4(),
                character_id: req.character_id,
                npc_id: req.npc_id,
                relationship_type: req.relationship_type,
                notes: req.notes.unwrap_or_default(),
                last_interaction: Some(now),
                created_at: now,
                updated_at: now,
            });
        }
        self.updated_at = now;
    }

    /// Remove the relationship with an NPC. Unknown NPCs are ignored.
    pub fn remove_relationship(&mut self, npc_id: Uuid) {
        self.relationships.retain(|r| r.npc_id != npc_id);
        self.updated_at = Utc::now();
    }

    /// Relationship with a specific NPC, if one exists.
    pub fn relationship_with(&self, npc_id: Uuid) -> Option<&CharacterRelationship> {
        self.relationships.iter().find(|r| r.npc_id == npc_id)
    }
}

impl Achievement {
    /// Check if the achievement is linked to a quest.
    pub fn is_quest_related(&self) -> bool {
        self.quest_id.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_request() -> CreateCharacterRequest {
        CreateCharacterRequest {
            campaign_id: Uuid::new_v4(),
            name: "Theren".to_string(),
            race: "Elf".to_string(),
            class: "Wizard".to_string(),
            level: 5,
            max_hp: 28,
            background: "Sage of Candlekeep".to_string(),
            alignment: Some("Neutral Good".to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_new_character_defaults() {
        let pc = PlayerCharacter::new(sample_request());

        assert!(pc.is_active);
        assert!(pc.achievements.is_empty());
        assert!(pc.relationships.is_empty());
        assert_eq!(pc.notes, "");
        assert_eq!(pc.stats_label(), "Level 5 Elf Wizard");
    }

    #[test]
    fn test_update_is_partial() {
        let mut pc = PlayerCharacter::new(sample_request());

        pc.update(UpdateCharacterRequest {
            level: Some(6),
            ..Default::default()
        });

        assert_eq!(pc.level, 6);
        assert_eq!(pc.name, "Theren");
        assert_eq!(pc.class, "Wizard");
    }

    #[test]
    fn test_can_level_up_bounds() {
        let mut pc = PlayerCharacter::new(sample_request());
        assert!(pc.can_level_up());

        pc.level = MAX_LEVEL;
        assert!(!pc.can_level_up());

        pc.level = 10;
        pc.is_active = false;
        assert!(!pc.can_level_up());
    }

    #[test]
    fn test_relationship_upsert() {
        let mut pc = PlayerCharacter::new(sample_request());
        let npc = Uuid::new_v4();

        pc.update_relationship(UpdateRelationshipRequest {
            character_id: pc.id,
            npc_id: npc,
            relationship_type: RelationshipType::Suspicious,
            notes: Some("met in Phandalin".to_string()),
        });
        pc.update_relationship(UpdateRelationshipRequest {
            character_id: pc.id,
            npc_id: npc,
            relationship_type: RelationshipType::Ally,
            notes: None,
        });

        assert_eq!(pc.relationships.len(), 1);
        let rel = pc.relationship_with(npc).unwrap();
        assert_eq!(rel.relationship_type, RelationshipType::Ally);
        assert_eq!(rel.notes, "met in Phandalin");

        pc.remove_relationship(npc);
        assert!(pc.relationship_with(npc).is_none());
    }

    #[test]
    fn test_achievements_sorted_newest_first() {
        let mut pc = PlayerCharacter::new(sample_request());
        pc.add_achievement(AddAchievementRequest {
            character_id: pc.id,
            title: "First Blood".to_string(),
            description: String::new(),
            quest_id: None,
            session_date: None,
            achievement_type: AchievementType::CombatVictory,
        });
        pc.achievements[0].created_at = Utc::now() - chrono::Duration::days(1);
        pc.add_achievement(AddAchievementRequest {
            character_id: pc.id,
            title: "Dragon Slayer".to_string(),
            description: String::new(),
            quest_id: Some(Uuid::new_v4()),
            session_date: None,
            achievement_type: AchievementType::QuestCompleted,
        });

        let sorted = pc.achievements_sorted();
        assert_eq!(sorted[0].title, "Dragon Slayer");
        assert!(sorted[0].is_quest_related());
        assert!(!sorted[1].is_quest_related());
    }

    #[test]
    fn test_achievement_type_serde() {
        let json = serde_json::to_string(&AchievementType::QuestCompleted).unwrap();
        assert_eq!(json, "\"QuestCompleted\"");

        let custom: AchievementType =
            serde_json::from_str("{\"Custom\":\"Tavern Brawl\"}").unwrap();
        assert_eq!(custom.label(), "Tavern Brawl");
    }
}
