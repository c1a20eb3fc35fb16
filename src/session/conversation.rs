// src/session/conversation.rs — Async driver binding a session to a service

use std::sync::Arc;

use super::{Session, Turn};
use crate::client::AnswerService;

/// Owns one session and the service it talks to.
///
/// `send` takes `&mut self`, so a second exchange cannot start while the
/// first is being awaited. Views that need to keep handling input while a
/// request is in flight drive `Session` directly (see `tui::app`).
pub struct Conversation {
    service: Arc<dyn AnswerService>,
    session: Session,
}

impl Conversation {
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        Self {
            service,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn service(&self) -> &Arc<dyn AnswerService> {
        &self.service
    }

    /// Drop the turn log and continuity token.
    pub fn reset(&mut self) {
        self.session = Session::new();
    }

    /// Run one exchange. Returns the assistant turn, or `None` when the
    /// draft was rejected and no request was issued.
    pub async fn send(&mut self, draft: &str) -> Option<&Turn> {
        let request = self.session.submit(draft)?;
        let outcome = self.service.ask(request).await;
        self.session.resolve(outcome)
    }
}
