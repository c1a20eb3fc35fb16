// src/client/mod.rs — Answer service contract

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::HaqooqError;

pub use http::HttpAnswerService;

/// The external question-answering backend.
///
/// Every failure (transport, non-success status, undecodable body) comes back
/// as `Err`; the session does not distinguish between them.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Human-readable location, shown in status lines.
    fn endpoint(&self) -> &str;

    async fn ask(&self, request: AskRequest) -> Result<AskResponse, HaqooqError>;
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    /// Serialized as `null` before the first successful exchange.
    pub conversation_id: Option<String>,
}

/// Successful body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Citation>,
    pub conversation_id: String,
}

/// A backend-supplied reference supporting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    pub page: u32,
    pub chunk_id: u32,
    pub relevance_score: f64,
}

/// `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// One entry of the backend-side conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

/// `GET /memory/conversation/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    pub conversation_id: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}
