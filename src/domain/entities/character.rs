//! Finished character - the payload handed to the campaign store

use chrono::{DateTime, Utc};

use crate::domain::entities::CharacterDraft;
use crate::domain::rules;
use crate::domain::value_objects::{AttributeValues, Background, Identity};

/// The assembled character, ready to be saved
///
/// Built from a completed draft; the store mints the document identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub identity: Identity,
    pub appearance: String,
    pub background: Background,
    pub attributes: AttributeValues,
    pub class_skills: Vec<String>,
    /// Derived final skill set (automatic plus selected)
    pub skills: Vec<String>,
    pub avatar: Option<String>,
    /// Starting gear derived from the class
    pub equipment: Vec<String>,
    pub gold: u32,
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Assemble the final payload from a draft
    ///
    /// Field preconditions are the wizard's responsibility; this only
    /// derives the class-dependent extras.
    pub fn from_draft(draft: &CharacterDraft) -> Self {
        let class = draft.identity.class.as_str();
        Self {
            identity: draft.identity.clone(),
            appearance: draft.appearance.clone(),
            background: draft.background.clone(),
            attributes: *draft.attributes.values(),
            class_skills: draft.class_skills.clone(),
            skills: draft.final_skills(),
            avatar: draft.avatar.clone(),
            equipment: rules::starting_equipment(class)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            gold: rules::starting_gold(class),
            created_at: Utc::now(),
        }
    }
}
