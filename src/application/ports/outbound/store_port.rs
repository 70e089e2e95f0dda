//! Store ports - Interfaces for the remote campaign service
//!
//! These traits define the contracts the infrastructure adapters must
//! implement. The wizard depends on these traits, never on a concrete
//! storage technology.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::{DraftSnapshot, StoredDraft};
use crate::domain::entities::Character;
use crate::domain::value_objects::{CampaignId, CharacterId, DraftId, UserId};

// =============================================================================
// Draft Store Port
// =============================================================================

/// Port for the per-(campaign, user) draft document
///
/// At most one live draft is expected per pair. Updates are full-state and
/// last-write-wins; the store is the durable mirror of the wizard's memory.
#[async_trait]
pub trait DraftStorePort: Send + Sync {
    /// Find the existing draft for a (campaign, user) pair
    async fn find(&self, campaign: CampaignId, user: UserId) -> Result<Option<StoredDraft>>;

    /// Create a fresh draft with the default shape
    async fn create(&self, campaign: CampaignId, user: UserId) -> Result<DraftId>;

    /// Overwrite the draft's state
    async fn update(
        &self,
        campaign: CampaignId,
        draft: DraftId,
        snapshot: &DraftSnapshot,
    ) -> Result<()>;

    /// Mark the draft as the finalized, playable character
    async fn activate(&self, campaign: CampaignId, draft: DraftId) -> Result<()>;
}

// =============================================================================
// Character Store Port
// =============================================================================

/// Port for the finished-character document store
#[async_trait]
pub trait CharacterStorePort: Send + Sync {
    /// Persist the finished character; the store mints the identifier
    async fn save(&self, campaign: CampaignId, character: &Character) -> Result<CharacterId>;
}
