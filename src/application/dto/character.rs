//! Finished-character wire format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::{BackgroundSnapshot, IdentitySnapshot};
use crate::domain::entities::Character;
use crate::domain::value_objects::AttributeValues;

/// The payload handed to the character document store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPayload {
    pub identity: IdentitySnapshot,
    pub appearance: String,
    pub background: BackgroundSnapshot,
    pub attributes: AttributeValues,
    pub class_skills: Vec<String>,
    pub skills: Vec<String>,
    pub avatar: Option<String>,
    pub equipment: Vec<String>,
    pub gold: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&Character> for CharacterPayload {
    fn from(character: &Character) -> Self {
        Self {
            identity: IdentitySnapshot::from(&character.identity),
            appearance: character.appearance.clone(),
            background: BackgroundSnapshot::from(&character.background),
            attributes: character.attributes,
            class_skills: character.class_skills.clone(),
            skills: character.skills.clone(),
            avatar: character.avatar.clone(),
            equipment: character.equipment.clone(),
            gold: character.gold,
            created_at: character.created_at,
        }
    }
}
