//! Draft wire format
//!
//! Every field is optional on the wire; defaulting happens exactly once, in
//! [`DraftSnapshot::hydrate`]. Snapshots are full-state and last-write-wins,
//! so a store that missed a flush heals on the next one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CharacterDraft, DraftStatus};
use crate::domain::value_objects::{
    AttributeAllocation, AttributeValues, Background, DraftId, Identity,
};

/// Version stamped on every snapshot this client writes
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

/// Full draft state as exchanged with the draft store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftSnapshot {
    pub schema_version: u32,
    pub status: DraftStatus,
    pub identity: Option<IdentitySnapshot>,
    pub appearance: Option<String>,
    pub background: Option<BackgroundSnapshot>,
    pub attributes: Option<AttributeValues>,
    /// Carried for observability; hydration recomputes the remainder from
    /// the attribute values so the budget invariant cannot drift
    pub remaining_points: Option<u8>,
    pub class_skills: Option<Vec<String>>,
    pub avatar: Option<String>,
    pub ai_reasoning: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for DraftSnapshot {
    fn default() -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            status: DraftStatus::Draft,
            identity: None,
            appearance: None,
            background: None,
            attributes: None,
            remaining_points: None,
            class_skills: None,
            avatar: None,
            ai_reasoning: None,
            updated_at: None,
        }
    }
}

impl DraftSnapshot {
    /// Capture the full current state of a draft
    pub fn capture(draft: &CharacterDraft) -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            status: draft.status,
            identity: Some(IdentitySnapshot::from(&draft.identity)),
            appearance: Some(draft.appearance.clone()),
            background: Some(BackgroundSnapshot::from(&draft.background)),
            attributes: Some(*draft.attributes.values()),
            remaining_points: Some(draft.attributes.remaining()),
            class_skills: Some(draft.class_skills.clone()),
            avatar: draft.avatar.clone(),
            ai_reasoning: Some(draft.ai_reasoning.clone()),
            updated_at: Some(Utc::now()),
        }
    }

    /// Merge this snapshot over the default draft shape
    ///
    /// Missing fields fall back to defaults, the point remainder is
    /// recomputed, and the stored class-skill selection is replayed through
    /// the selection rules so stale data cannot smuggle in an invalid pick.
    pub fn hydrate(self) -> CharacterDraft {
        let attributes = match &self.attributes {
            Some(values) => AttributeAllocation::from_values(values),
            None => AttributeAllocation::default(),
        };
        let mut draft = CharacterDraft {
            status: self.status,
            identity: self
                .identity
                .map(IdentitySnapshot::into_identity)
                .unwrap_or_default(),
            appearance: self.appearance.unwrap_or_default(),
            background: self
                .background
                .map(BackgroundSnapshot::into_background)
                .unwrap_or_default(),
            attributes,
            class_skills: Vec::new(),
            avatar: self.avatar,
            ai_reasoning: self.ai_reasoning.unwrap_or_default(),
        };
        for skill in self.class_skills.unwrap_or_default() {
            draft.toggle_class_skill(&skill);
        }
        draft
    }
}

/// Identity fields on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentitySnapshot {
    pub name: Option<String>,
    pub race: Option<String>,
    pub race_detail: Option<String>,
    pub class: Option<String>,
    pub archetype: Option<String>,
    pub gender: Option<String>,
}

impl IdentitySnapshot {
    pub fn into_identity(self) -> Identity {
        Identity {
            name: self.name.unwrap_or_default(),
            race: self.race.unwrap_or_default(),
            race_detail: self.race_detail.unwrap_or_default(),
            class: self.class.unwrap_or_default(),
            archetype: self.archetype.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
        }
    }
}

impl From<&Identity> for IdentitySnapshot {
    fn from(identity: &Identity) -> Self {
        Self {
            name: Some(identity.name.clone()),
            race: Some(identity.race.clone()),
            race_detail: Some(identity.race_detail.clone()),
            class: Some(identity.class.clone()),
            archetype: Some(identity.archetype.clone()),
            gender: Some(identity.gender.clone()),
        }
    }
}

/// Background record on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundSnapshot {
    pub key: Option<String>,
    pub label: Option<String>,
    pub granted_skills: Option<Vec<String>>,
    pub description: Option<String>,
    pub motivation: Option<String>,
}

impl BackgroundSnapshot {
    pub fn into_background(self) -> Background {
        Background {
            key: self.key.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
            granted_skills: self.granted_skills.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            motivation: self.motivation.unwrap_or_default(),
        }
    }
}

impl From<&Background> for BackgroundSnapshot {
    fn from(background: &Background) -> Self {
        Self {
            key: Some(background.key.clone()),
            label: Some(background.label.clone()),
            granted_skills: Some(background.granted_skills.clone()),
            description: Some(background.description.clone()),
            motivation: Some(background.motivation.clone()),
        }
    }
}

/// A draft as returned by the store's lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDraft {
    pub id: DraftId,
    pub snapshot: DraftSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Attribute;

    #[test]
    fn test_empty_snapshot_hydrates_to_defaults() {
        let snapshot: DraftSnapshot = serde_json::from_str("{}").unwrap();
        let draft = snapshot.hydrate();
        assert_eq!(draft, CharacterDraft::default());
        assert_eq!(draft.attributes.remaining(), AttributeAllocation::BUDGET);
    }

    #[test]
    fn test_capture_hydrate_preserves_state() {
        let mut draft = CharacterDraft::default();
        draft.identity.name = "Azael".to_string();
        draft.set_race("Elfo");
        draft.identity.race_detail = "Alto Elfo".to_string();
        draft.set_class("Mago");
        draft.select_background("Sabio");
        draft.appearance = "Olhar cansado de quem leu demais".to_string();
        draft.attributes.increase(Attribute::Intelligence);
        draft.attributes.increase(Attribute::Intelligence);
        draft.toggle_class_skill("Investigation");
        draft.ai_reasoning = "intelecto acima de tudo".to_string();

        let restored = DraftSnapshot::capture(&draft).hydrate();
        assert_eq!(restored, draft);
    }

    #[test]
    fn test_hydration_recomputes_remaining_points() {
        let mut snapshot = DraftSnapshot::default();
        snapshot.attributes = Some(AttributeValues {
            strength: 14,
            ..AttributeValues::default()
        });
        // A stale remainder from storage is ignored
        snapshot.remaining_points = Some(27);

        let draft = snapshot.hydrate();
        assert_eq!(draft.attributes.get(Attribute::Strength), 14);
        assert_eq!(draft.attributes.remaining(), 20);
    }

    #[test]
    fn test_hydration_replays_class_skills_through_rules() {
        let mut snapshot = DraftSnapshot::default();
        snapshot.identity = Some(IdentitySnapshot {
            race: Some("Elfo".to_string()),
            class: Some("Mago".to_string()),
            ..IdentitySnapshot::default()
        });
        // Stealth is not a Mago option; three picks exceed the quota
        snapshot.class_skills = Some(vec![
            "Stealth".to_string(),
            "Arcana".to_string(),
            "History".to_string(),
            "Medicine".to_string(),
        ]);

        let draft = snapshot.hydrate();
        assert_eq!(draft.class_skills, vec!["Arcana", "History"]);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut draft = CharacterDraft::default();
        draft.identity.race = "Elfo".to_string();
        draft.identity.race_detail = "Alto Elfo".to_string();

        let json = serde_json::to_value(DraftSnapshot::capture(&draft)).unwrap();
        assert!(json.get("schemaVersion").is_some());
        assert!(json.get("remainingPoints").is_some());
        assert!(json.get("classSkills").is_some());
        assert!(json.get("aiReasoning").is_some());
        assert_eq!(json["status"], "draft");
        assert_eq!(json["identity"]["raceDetail"], "Alto Elfo");
    }
}
