//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::{CharacterStorePort, DraftStorePort, SuggestionPort};
use crate::application::services::CharacterWizard;
use crate::domain::value_objects::{CampaignId, UserId};
use crate::infrastructure::backend::BackendClient;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::offline::{InMemoryCampaignStore, StaticSuggestionClient};
use crate::infrastructure::suggestions::SuggestionClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub drafts: Arc<dyn DraftStorePort>,
    pub characters: Arc<dyn CharacterStorePort>,
    pub suggestions: Arc<dyn SuggestionPort>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        if config.offline {
            let store = Arc::new(InMemoryCampaignStore::new());
            return Ok(Self {
                drafts: store.clone(),
                characters: store,
                suggestions: Arc::new(StaticSuggestionClient),
                config,
            });
        }

        let backend = Arc::new(BackendClient::new(
            &config.backend_base_url,
            config.request_timeout(),
        )?);
        let suggestions = Arc::new(SuggestionClient::new(
            &config.suggestion_base_url,
            config.request_timeout(),
        )?);

        Ok(Self {
            drafts: backend.clone(),
            characters: backend,
            suggestions,
            config,
        })
    }

    /// Enter the creation wizard for a (campaign, user) pair
    pub async fn open_wizard(&self, campaign: CampaignId, user: UserId) -> CharacterWizard {
        CharacterWizard::start(
            Arc::clone(&self.drafts),
            Arc::clone(&self.characters),
            Arc::clone(&self.suggestions),
            campaign,
            user,
            self.config.sync(),
        )
        .await
    }
}
