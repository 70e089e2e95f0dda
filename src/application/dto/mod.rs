//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP adapters) can
//! serialize/deserialize without pulling wire concerns into the domain model.

pub mod character;
pub mod draft;
pub mod suggestions;

pub use character::CharacterPayload;
pub use draft::{
    BackgroundSnapshot, DraftSnapshot, IdentitySnapshot, StoredDraft, DRAFT_SCHEMA_VERSION,
};
pub use suggestions::{
    AttributeSuggestion, AttributeSuggestionRequest, EssenceSuggestion, EssenceSuggestionRequest,
    NameSuggestionRequest,
};
