// src/client/http.rs — reqwest-backed answer service

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{
    AnswerService, AskRequest, AskResponse, ConversationHistory, HealthStatus, HistoryEntry,
};
use crate::infra::config::ServiceConfig;
use crate::infra::errors::HaqooqError;
use crate::util::truncate_str;

/// Longest error body kept in a `Status` error.
const MAX_ERROR_BODY: usize = 512;

pub struct HttpAnswerService {
    config: ServiceConfig,
    chat_url: String,
    client: reqwest::Client,
}

impl HttpAnswerService {
    pub fn new(config: &ServiceConfig) -> Result<Self, HaqooqError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HaqooqError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config: config.clone(),
            chat_url: config.chat_url(),
            client,
        })
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, HaqooqError> {
        let url = self.config.join("/health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HaqooqError::transport(&url, e))?;
        decode(response).await
    }

    /// `GET /memory/conversation/{id}`.
    pub async fn history(&self, conversation_id: &str) -> Result<ConversationHistory, HaqooqError> {
        let url = self.conversation_url(conversation_id)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| HaqooqError::transport(url.as_str(), e))?;
        decode(response).await
    }

    /// `DELETE /memory/conversation/{id}`. Returns the backend's message.
    pub async fn forget(&self, conversation_id: &str) -> Result<String, HaqooqError> {
        let url = self.conversation_url(conversation_id)?;
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(|e| HaqooqError::transport(url.as_str(), e))?;
        let body: serde_json::Value = decode(response).await?;
        Ok(body["message"]
            .as_str()
            .unwrap_or("Conversation cleared")
            .to_string())
    }

    /// `GET /memory/conversations`: every stored conversation by id.
    pub async fn conversations(&self) -> Result<BTreeMap<String, Vec<HistoryEntry>>, HaqooqError> {
        let url = self.config.join("/memory/conversations");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HaqooqError::transport(&url, e))?;
        decode(response).await
    }

    /// `GET /memory/stats`. The shape is backend-defined, so it stays untyped.
    pub async fn stats(&self) -> Result<serde_json::Value, HaqooqError> {
        let url = self.config.join("/memory/stats");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HaqooqError::transport(&url, e))?;
        decode(response).await
    }
}

impl HttpAnswerService {
    /// `{base}/memory/conversation/{id}` with the id as one escaped segment.
    fn conversation_url(&self, conversation_id: &str) -> Result<Url, HaqooqError> {
        let mut url = Url::parse(&self.config.join("/memory/conversation"))
            .map_err(|e| HaqooqError::Config(format!("invalid service URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                HaqooqError::Config(format!(
                    "service URL cannot take a path: {}",
                    self.config.base_url
                ))
            })?
            .push(conversation_id);
        Ok(url)
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    fn endpoint(&self) -> &str {
        &self.chat_url
    }

    async fn ask(&self, request: AskRequest) -> Result<AskResponse, HaqooqError> {
        tracing::debug!(
            "POST {} ({} chars, conversation {:?})",
            self.chat_url,
            request.message.len(),
            request.conversation_id
        );

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HaqooqError::transport(&self.chat_url, e))?;

        let answer: AskResponse = decode(response).await?;
        tracing::debug!(
            "Answer received: {} chars, {} source(s), conversation {}",
            answer.response.len(),
            answer.sources.len(),
            answer.conversation_id
        );
        Ok(answer)
    }
}

/// Map a non-success status to `Status` and an undecodable body to `Decode`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HaqooqError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(HaqooqError::Status {
            status: status.as_u16(),
            body: truncate_str(&body, MAX_ERROR_BODY).to_string(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| HaqooqError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| HaqooqError::Decode(e.to_string()))
}
