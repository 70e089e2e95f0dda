//! Suggestion functions client
//!
//! Thin adapter over the hosted suggestion endpoints. Each capability is a
//! single POST; callers treat any failure as "no suggestion".

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::dto::{
    AttributeSuggestion, AttributeSuggestionRequest, EssenceSuggestion, EssenceSuggestionRequest,
    NameSuggestionRequest,
};
use crate::application::ports::outbound::SuggestionPort;

/// Client for the suggestion cloud functions
pub struct SuggestionClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Deserialize)]
struct NamesResponse {
    #[serde(default)]
    names: Vec<String>,
}

impl SuggestionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SuggestionClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<Req, Resp>(
        &self,
        function: &str,
        request: &Req,
    ) -> Result<Resp, SuggestionClientError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, function))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(SuggestionClientError::ApiError(error_text));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SuggestionPort for SuggestionClient {
    async fn suggest_names(&self, request: &NameSuggestionRequest) -> Result<Vec<String>> {
        let response: NamesResponse = self.post_json("suggestCharacterName", request).await?;
        Ok(response.names)
    }

    async fn suggest_essence(
        &self,
        request: &EssenceSuggestionRequest,
    ) -> Result<EssenceSuggestion> {
        Ok(self.post_json("suggestCharacterEssence", request).await?)
    }

    async fn suggest_attributes(
        &self,
        request: &AttributeSuggestionRequest,
    ) -> Result<AttributeSuggestion> {
        Ok(self.post_json("suggestAttributes", request).await?)
    }
}
