// src/cli/ask.rs — One-shot question

use std::sync::Arc;

use crate::client::{AnswerService, AskRequest, HttpAnswerService};
use crate::session::Conversation;

use super::chat::format_turn;

/// Ask one question. With `json`, print the raw response and fail on error;
/// otherwise run it through a session like the chat views do.
pub async fn run_ask(
    service: Arc<HttpAnswerService>,
    question: &str,
    json: bool,
) -> anyhow::Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("nothing to ask: the question is empty");
    }

    if json {
        let response = service
            .ask(AskRequest {
                message: question.trim().to_string(),
                conversation_id: None,
            })
            .await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let mut conversation = Conversation::new(service);
    if conversation.send(question).await.is_none() {
        anyhow::bail!("the question was not accepted");
    }

    let session = conversation.session();
    if let Some(turn) = session.last_turn() {
        print!("{}", format_turn(turn, false));
    }
    if let Some(cause) = session.last_failure() {
        anyhow::bail!("{}", cause);
    }
    Ok(())
}
