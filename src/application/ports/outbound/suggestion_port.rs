//! Suggestion port - Interface for the AI text-suggestion capabilities

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::{
    AttributeSuggestion, AttributeSuggestionRequest, EssenceSuggestion, EssenceSuggestionRequest,
    NameSuggestionRequest,
};

/// Port for the three suggestion capabilities the wizard consumes
///
/// Each call is a single request/response with no retry; callers treat a
/// failure as "no suggestion" and keep whatever the fields already hold.
#[async_trait]
pub trait SuggestionPort: Send + Sync {
    /// Suggest character names for a race/class/gender combination
    async fn suggest_names(&self, request: &NameSuggestionRequest) -> Result<Vec<String>>;

    /// Suggest appearance, backstory and/or motivation text
    async fn suggest_essence(&self, request: &EssenceSuggestionRequest)
        -> Result<EssenceSuggestion>;

    /// Suggest an attribute distribution for a play style
    async fn suggest_attributes(
        &self,
        request: &AttributeSuggestionRequest,
    ) -> Result<AttributeSuggestion>;
}
