//! Request/response shapes for the suggestion functions

use serde::{Deserialize, Serialize};

use crate::domain::entities::CharacterDraft;
use crate::domain::value_objects::{AttributeValues, PlayStyle};

/// Input for a name suggestion; all three fields must be chosen first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestionRequest {
    pub race: String,
    pub class: String,
    pub gender: String,
}

/// Input for appearance/backstory/motivation suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssenceSuggestionRequest {
    pub name: String,
    pub race: String,
    pub class: String,
    pub gender: String,
    pub appearance_hint: String,
    pub backstory_hint: String,
}

impl EssenceSuggestionRequest {
    pub fn from_draft(draft: &CharacterDraft) -> Self {
        Self {
            name: draft.identity.name.clone(),
            race: draft.identity.race.clone(),
            class: draft.identity.class.clone(),
            gender: draft.identity.gender.clone(),
            appearance_hint: draft.appearance.clone(),
            backstory_hint: draft.background.description.clone(),
        }
    }
}

/// Suggested essence text; any subset may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EssenceSuggestion {
    pub appearance: Option<String>,
    pub backstory: Option<String>,
    pub motivation: Option<String>,
}

/// Input for an attribute distribution suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSuggestionRequest {
    pub race: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_detail: Option<String>,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    pub style: PlayStyle,
}

impl AttributeSuggestionRequest {
    pub fn from_draft(draft: &CharacterDraft, style: PlayStyle) -> Self {
        let optional = |value: &str| {
            if value.trim().is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        Self {
            race: draft.identity.race.clone(),
            race_detail: optional(&draft.identity.race_detail),
            class: draft.identity.class.clone(),
            archetype: optional(&draft.identity.archetype),
            style,
        }
    }
}

/// A suggested distribution with the model's reasoning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSuggestion {
    pub suggested_attributes: AttributeValues,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_request_omits_empty_optionals() {
        let mut draft = CharacterDraft::default();
        draft.set_race("Humano");
        draft.set_class("Guerreiro");

        let request = AttributeSuggestionRequest::from_draft(&draft, PlayStyle::Offensive);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("raceDetail").is_none());
        assert!(json.get("archetype").is_none());
        assert_eq!(json["style"], "ofensivo");
    }

    #[test]
    fn test_essence_suggestion_tolerates_partial_payloads() {
        let suggestion: EssenceSuggestion =
            serde_json::from_str(r#"{"backstory":"Cresceu no porto"}"#).unwrap();
        assert!(suggestion.appearance.is_none());
        assert_eq!(suggestion.backstory.as_deref(), Some("Cresceu no porto"));
        assert!(suggestion.motivation.is_none());
    }
}
