//! Campaign service client
//!
//! REST adapter over the campaign backend that owns drafts and finished
//! characters. One client implements both store ports.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::dto::{CharacterPayload, DraftSnapshot, StoredDraft};
use crate::application::ports::outbound::{CharacterStorePort, DraftStorePort};
use crate::domain::entities::Character;
use crate::domain::value_objects::{CampaignId, CharacterId, DraftId, UserId};

/// Client for the campaign service REST API
pub struct BackendClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Deserialize)]
struct CreatedDraft {
    id: DraftId,
}

#[derive(Debug, Deserialize)]
struct CreatedCharacter {
    id: CharacterId,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let error_text = response.text().await?;
            Err(BackendError::ApiError(error_text))
        }
    }
}

#[async_trait]
impl DraftStorePort for BackendClient {
    async fn find(&self, campaign: CampaignId, user: UserId) -> Result<Option<StoredDraft>> {
        let response = self
            .client
            .get(format!(
                "{}/api/campaigns/{}/users/{}/draft",
                self.base_url, campaign, user
            ))
            .send()
            .await
            .map_err(BackendError::from)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        let stored: StoredDraft = response.json().await.map_err(BackendError::from)?;
        Ok(Some(stored))
    }

    async fn create(&self, campaign: CampaignId, user: UserId) -> Result<DraftId> {
        let response = self
            .client
            .post(format!(
                "{}/api/campaigns/{}/users/{}/draft",
                self.base_url, campaign, user
            ))
            .send()
            .await
            .map_err(BackendError::from)?;

        let response = Self::check(response).await?;
        let created: CreatedDraft = response.json().await.map_err(BackendError::from)?;
        Ok(created.id)
    }

    async fn update(
        &self,
        campaign: CampaignId,
        draft: DraftId,
        snapshot: &DraftSnapshot,
    ) -> Result<()> {
        let response = self
            .client
            .put(format!(
                "{}/api/campaigns/{}/drafts/{}",
                self.base_url, campaign, draft
            ))
            .json(snapshot)
            .send()
            .await
            .map_err(BackendError::from)?;

        Self::check(response).await?;
        Ok(())
    }

    async fn activate(&self, campaign: CampaignId, draft: DraftId) -> Result<()> {
        let response = self
            .client
            .post(format!(
                "{}/api/campaigns/{}/drafts/{}/activate",
                self.base_url, campaign, draft
            ))
            .send()
            .await
            .map_err(BackendError::from)?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CharacterStorePort for BackendClient {
    async fn save(&self, campaign: CampaignId, character: &Character) -> Result<CharacterId> {
        let payload = CharacterPayload::from(character);
        let response = self
            .client
            .post(format!(
                "{}/api/campaigns/{}/characters",
                self.base_url, campaign
            ))
            .json(&payload)
            .send()
            .await
            .map_err(BackendError::from)?;

        let response = Self::check(response).await?;
        let created: CreatedCharacter = response.json().await.map_err(BackendError::from)?;
        Ok(created.id)
    }
}
