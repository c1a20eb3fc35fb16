// src/cli/memory.rs — Backend-side conversation memory

use std::collections::BTreeMap;

use crate::client::{HistoryEntry, HttpAnswerService};
use crate::util::ellipsize;

pub async fn run_history(service: &HttpAnswerService, conversation_id: &str) -> anyhow::Result<()> {
    let history = service.history(conversation_id).await?;
    if history.history.is_empty() {
        println!("No history for {}.", history.conversation_id);
        return Ok(());
    }

    println!("Conversation {}:", history.conversation_id);
    for entry in &history.history {
        println!("  [{}] {}", entry.role, ellipsize(&entry.content, 200));
    }
    Ok(())
}

pub async fn run_conversations(service: &HttpAnswerService) -> anyhow::Result<()> {
    let all = service.conversations().await?;
    print!("{}", format_conversations(&all));
    Ok(())
}

/// One line per conversation: id, message count and the opening question.
pub fn format_conversations(all: &BTreeMap<String, Vec<HistoryEntry>>) -> String {
    if all.is_empty() {
        return "No conversations stored.\n".to_string();
    }

    let mut out = String::new();
    for (id, history) in all {
        let opening = history
            .iter()
            .find(|e| e.role == "user")
            .map(|e| ellipsize(&e.content, 60))
            .unwrap_or_default();
        out.push_str(&format!("  {}  {} message(s)  {}\n", id, history.len(), opening));
    }
    out
}

pub async fn run_forget(service: &HttpAnswerService, conversation_id: &str) -> anyhow::Result<()> {
    let message = service.forget(conversation_id).await?;
    println!("{}", message);
    Ok(())
}
