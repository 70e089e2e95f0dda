//! Offline adapters - in-memory campaign store and canned suggestions
//!
//! The client can run without any backend: drafts live in a process-local
//! map and suggestions come from fixed texts. The same adapters back the
//! test suite.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::application::dto::{
    AttributeSuggestion, AttributeSuggestionRequest, DraftSnapshot, EssenceSuggestion,
    EssenceSuggestionRequest, NameSuggestionRequest, StoredDraft,
};
use crate::application::ports::outbound::{CharacterStorePort, DraftStorePort, SuggestionPort};
use crate::domain::entities::{Character, DraftStatus};
use crate::domain::value_objects::{
    AttributeValues, CampaignId, CharacterId, DraftId, PlayStyle, UserId,
};

struct DraftRecord {
    campaign: CampaignId,
    user: UserId,
    snapshot: DraftSnapshot,
}

/// Process-local draft and character store
#[derive(Default)]
pub struct InMemoryCampaignStore {
    drafts: RwLock<HashMap<DraftId, DraftRecord>>,
    characters: RwLock<HashMap<CharacterId, Character>>,
    fail_character_saves: bool,
}

impl InMemoryCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose character saves always fail; used to exercise the
    /// wizard's retry path
    pub fn failing_character_store() -> Self {
        Self {
            fail_character_saves: true,
            ..Self::default()
        }
    }

    pub async fn stored_draft(&self, id: DraftId) -> Option<DraftSnapshot> {
        self.drafts
            .read()
            .await
            .get(&id)
            .map(|record| record.snapshot.clone())
    }

    pub async fn stored_character(&self, id: CharacterId) -> Option<Character> {
        self.characters.read().await.get(&id).cloned()
    }

    pub async fn character_count(&self) -> usize {
        self.characters.read().await.len()
    }
}

#[async_trait]
impl DraftStorePort for InMemoryCampaignStore {
    async fn find(&self, campaign: CampaignId, user: UserId) -> Result<Option<StoredDraft>> {
        let drafts = self.drafts.read().await;
        let found = drafts
            .iter()
            .find(|(_, record)| record.campaign == campaign && record.user == user)
            .map(|(id, record)| StoredDraft {
                id: *id,
                snapshot: record.snapshot.clone(),
            });
        Ok(found)
    }

    async fn create(&self, campaign: CampaignId, user: UserId) -> Result<DraftId> {
        let id = DraftId::new();
        self.drafts.write().await.insert(
            id,
            DraftRecord {
                campaign,
                user,
                snapshot: DraftSnapshot::default(),
            },
        );
        Ok(id)
    }

    async fn update(
        &self,
        _campaign: CampaignId,
        draft: DraftId,
        snapshot: &DraftSnapshot,
    ) -> Result<()> {
        match self.drafts.write().await.get_mut(&draft) {
            Some(record) => record.snapshot = snapshot.clone(),
            None => warn!(draft_id = %draft, "update for unknown draft ignored"),
        }
        Ok(())
    }

    async fn activate(&self, _campaign: CampaignId, draft: DraftId) -> Result<()> {
        match self.drafts.write().await.get_mut(&draft) {
            Some(record) => record.snapshot.status = DraftStatus::Active,
            None => warn!(draft_id = %draft, "activate for unknown draft ignored"),
        }
        Ok(())
    }
}

#[async_trait]
impl CharacterStorePort for InMemoryCampaignStore {
    async fn save(&self, _campaign: CampaignId, character: &Character) -> Result<CharacterId> {
        if self.fail_character_saves {
            anyhow::bail!("character store unavailable");
        }
        // The document store enforces the same preconditions as the wizard
        if !character.identity.has_name() {
            anyhow::bail!("identity.name is required");
        }
        if !character.identity.has_race() {
            anyhow::bail!("identity.race is required");
        }
        if !character.identity.has_class() {
            anyhow::bail!("identity.class is required");
        }
        let id = CharacterId::new();
        self.characters.write().await.insert(id, character.clone());
        Ok(id)
    }
}

/// Fixed suggestion texts for offline runs
pub struct StaticSuggestionClient;

#[async_trait]
impl SuggestionPort for StaticSuggestionClient {
    async fn suggest_names(&self, _request: &NameSuggestionRequest) -> Result<Vec<String>> {
        Ok(vec![
            "Azael".to_string(),
            "Lirael".to_string(),
            "Theren".to_string(),
        ])
    }

    async fn suggest_essence(
        &self,
        _request: &EssenceSuggestionRequest,
    ) -> Result<EssenceSuggestion> {
        Ok(EssenceSuggestion {
            appearance: Some("Traços marcantes, vestes naturais e postura confiante.".to_string()),
            backstory: Some("Criado longe da civilização, moldado por rituais antigos.".to_string()),
            motivation: Some(
                "Busca compreender sua origem e proteger o equilíbrio do mundo.".to_string(),
            ),
        })
    }

    async fn suggest_attributes(
        &self,
        request: &AttributeSuggestionRequest,
    ) -> Result<AttributeSuggestion> {
        // Each spread spends the whole 27-point budget
        let (suggested_attributes, reasoning) = match request.style {
            PlayStyle::Offensive => (
                AttributeValues {
                    strength: 15,
                    dexterity: 14,
                    constitution: 13,
                    intelligence: 8,
                    wisdom: 10,
                    charisma: 12,
                },
                "Força e destreza altas para causar dano e agir primeiro.",
            ),
            PlayStyle::Defensive => (
                AttributeValues {
                    strength: 13,
                    dexterity: 12,
                    constitution: 15,
                    intelligence: 10,
                    wisdom: 14,
                    charisma: 8,
                },
                "Constituição e sabedoria altas para resistir e sobreviver.",
            ),
            PlayStyle::Versatile => (
                AttributeValues {
                    strength: 13,
                    dexterity: 13,
                    constitution: 13,
                    intelligence: 13,
                    wisdom: 13,
                    charisma: 10,
                },
                "Distribuição equilibrada para flexibilidade e interpretação.",
            ),
        };
        Ok(AttributeSuggestion {
            suggested_attributes,
            reasoning: reasoning.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CharacterDraft;
    use crate::domain::value_objects::AttributeAllocation;

    #[tokio::test]
    async fn test_find_is_scoped_to_campaign_and_user() {
        let store = InMemoryCampaignStore::new();
        let campaign = CampaignId::new();
        let user = UserId::new();

        let id = store.create(campaign, user).await.unwrap();

        let found = store.find(campaign, user).await.unwrap().unwrap();
        assert_eq!(found.id, id);

        assert!(store.find(campaign, UserId::new()).await.unwrap().is_none());
        assert!(store.find(CampaignId::new(), user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_activate_marks_status() {
        let store = InMemoryCampaignStore::new();
        let campaign = CampaignId::new();
        let id = store.create(campaign, UserId::new()).await.unwrap();

        store.activate(campaign, id).await.unwrap();
        let snapshot = store.stored_draft(id).await.unwrap();
        assert_eq!(snapshot.status, DraftStatus::Active);
    }

    #[tokio::test]
    async fn test_update_for_unknown_draft_is_ignored() {
        let store = InMemoryCampaignStore::new();
        let result = store
            .update(CampaignId::new(), DraftId::new(), &DraftSnapshot::default())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_character_save_enforces_identity_preconditions() {
        let store = InMemoryCampaignStore::new();
        let mut draft = CharacterDraft::default();
        draft.identity.name = "Azael".to_string();
        draft.set_class("Mago");
        // Race left unset
        let character = Character::from_draft(&draft);

        let result = store.save(CampaignId::new(), &character).await;
        assert!(result.is_err());
        assert_eq!(store.character_count().await, 0);
    }

    #[tokio::test]
    async fn test_static_spreads_spend_the_whole_budget() {
        let client = StaticSuggestionClient;
        for style in [
            PlayStyle::Offensive,
            PlayStyle::Defensive,
            PlayStyle::Versatile,
        ] {
            let mut draft = CharacterDraft::default();
            draft.set_race("Humano");
            draft.set_class("Guerreiro");
            let request = AttributeSuggestionRequest::from_draft(&draft, style);

            let suggestion = client.suggest_attributes(&request).await.unwrap();
            let mut allocation = AttributeAllocation::default();
            allocation.apply_suggested(&suggestion.suggested_attributes);
            assert_eq!(allocation.values(), &suggestion.suggested_attributes);
            assert_eq!(allocation.remaining(), 0, "style {}", style);
        }
    }
}
