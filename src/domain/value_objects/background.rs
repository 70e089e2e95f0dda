//! Narrative background attached to a draft

use crate::domain::rules::BackgroundDef;

/// The draft's background record
///
/// Selecting a catalog entry overwrites `key`, `label` and `granted_skills`
/// and seeds `description` with the canonical text; `description` and
/// `motivation` stay freely editable afterwards without re-selecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Background {
    /// Catalog key; empty when no background has been picked
    pub key: String,
    pub label: String,
    pub granted_skills: Vec<String>,
    pub description: String,
    pub motivation: String,
}

impl Background {
    /// Build the record for a catalog entry, keeping an existing motivation
    pub fn from_def(def: &BackgroundDef, motivation: String) -> Self {
        Self {
            key: def.key.to_string(),
            label: def.label.to_string(),
            granted_skills: def.granted_skills.iter().map(|s| s.to_string()).collect(),
            description: def.description.to_string(),
            motivation,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
