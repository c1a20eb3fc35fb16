// src/session/mod.rs — Conversation session state machine
//
// A session is an append-only turn log plus a tagged phase. `submit` moves
// Idle -> Awaiting and hands back the one request to send; `resolve` moves
// Awaiting -> Idle and appends exactly one assistant turn. Anything else is a
// no-op, so at most one request is ever outstanding.

pub mod conversation;
pub mod render;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::{AskRequest, AskResponse, Citation};
use crate::infra::errors::HaqooqError;

pub use conversation::Conversation;

/// Shown in place of an answer when the exchange fails for any reason.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Citation>,
    pub timestamp: DateTime<Local>,
}

impl Turn {
    fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            timestamp: Local::now(),
        }
    }

    fn assistant(content: impl Into<String>, sources: Vec<Citation>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            sources,
            timestamp: Local::now(),
        }
    }

    pub fn has_sources(&self) -> bool {
        self.role == Role::Assistant && !self.sources.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// One request is outstanding; `since` is when it was issued.
    Awaiting { since: DateTime<Local> },
}

#[derive(Debug, Clone)]
pub struct Session {
    turns: Vec<Turn>,
    conversation_id: Option<String>,
    phase: Phase,
    last_failure: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            conversation_id: None,
            phase: Phase::Idle,
            last_failure: None,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Continuity token issued by the backend, if any exchange has succeeded.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Cause of the most recent exchange's failure, cleared by a success.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Awaiting { .. })
    }

    /// Whether `submit(draft)` would be accepted right now.
    pub fn can_submit(&self, draft: &str) -> bool {
        !self.is_pending() && !draft.trim().is_empty()
    }

    /// Accept a draft. Returns the request to issue, or `None` when the draft
    /// is blank or a request is already outstanding.
    pub fn submit(&mut self, draft: &str) -> Option<AskRequest> {
        if self.is_pending() {
            tracing::debug!("Submit ignored: a request is already outstanding");
            return None;
        }
        let message = draft.trim();
        if message.is_empty() {
            return None;
        }

        self.turns.push(Turn::user(message));
        self.phase = Phase::Awaiting {
            since: Local::now(),
        };
        Some(AskRequest {
            message: message.to_string(),
            conversation_id: self.conversation_id.clone(),
        })
    }

    /// Apply the outcome of the outstanding request. Returns the appended
    /// assistant turn, or `None` if nothing was outstanding.
    pub fn resolve(&mut self, outcome: Result<AskResponse, HaqooqError>) -> Option<&Turn> {
        if !self.is_pending() {
            tracing::debug!("Stray completion ignored while idle");
            return None;
        }

        let turn = match outcome {
            Ok(answer) => {
                self.conversation_id = Some(answer.conversation_id);
                self.last_failure = None;
                Turn::assistant(render::strip_emphasis(&answer.response), answer.sources)
            }
            Err(e) => {
                tracing::warn!("Answer service request failed: {}", e);
                self.last_failure = Some(e.to_string());
                Turn::assistant(APOLOGY, Vec::new())
            }
        };

        self.turns.push(turn);
        self.phase = Phase::Idle;
        self.turns.last()
    }
}
