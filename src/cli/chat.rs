// src/cli/chat.rs — Line-oriented REPL

use std::sync::Arc;

use crate::client::{AnswerService, HttpAnswerService};
use crate::infra::prefs::Prefs;
use crate::landing;
use crate::session::render::{self, CitationChip};
use crate::session::{Conversation, Phase, Role, Turn};

/// Run the interactive REPL until EOF or `/quit`.
pub async fn run_repl(service: Arc<HttpAnswerService>, prefs: &Prefs) -> anyhow::Result<()> {
    eprintln!(
        "{} v{} | {}\n",
        landing::PRODUCT_NAME,
        env!("CARGO_PKG_VERSION"),
        service.endpoint(),
    );
    if landing::disclaimer_pending(prefs) {
        eprintln!("Disclaimer: {}\n", landing::DISCLAIMER);
        landing::dismiss_disclaimer(prefs);
    }
    eprintln!("Type a question, or /help for commands.\n");

    let mut conversation = Conversation::new(service.clone());

    while let Some(input) = read_input() {
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
            break;
        }

        if trimmed.starts_with('/') {
            handle_slash_command(trimmed, &mut conversation, &service).await;
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        eprintln!("Thinking...");
        if let Some(turn) = conversation.send(trimmed).await {
            println!("{}", format_turn(turn, true));
        }
    }

    let exchanges = conversation.session().turns().len() / 2;
    eprintln!("\nSession total: {} question(s)", exchanges);
    Ok(())
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

async fn handle_slash_command(
    input: &str,
    conversation: &mut Conversation,
    service: &HttpAnswerService,
) {
    let cmd = input.split_whitespace().next().unwrap_or(input);

    match cmd {
        "/status" => {
            let session = conversation.session();
            eprintln!("  Endpoint: {}", service.endpoint());
            eprintln!("  Turns: {}", session.turns().len());
            eprintln!(
                "  Conversation: {}",
                session.conversation_id().unwrap_or("(none yet)")
            );
            let phase = match session.phase() {
                Phase::Idle => "idle".to_string(),
                Phase::Awaiting { since } => format!("awaiting since {}", render::format_time(since)),
            };
            eprintln!("  State: {}", phase);
        }

        "/sources" => {
            let last_answer = conversation
                .session()
                .turns()
                .iter()
                .rev()
                .find(|t| t.role == Role::Assistant);
            match last_answer {
                Some(turn) if turn.has_sources() => {
                    for chip in render::chips(&turn.sources) {
                        eprintln!("{}", format_chip(&chip));
                    }
                }
                Some(_) => eprintln!("  The last answer cited no sources."),
                None => eprintln!("  No answers yet."),
            }
        }

        "/history" => match conversation.session().conversation_id() {
            Some(id) => match service.history(id).await {
                Ok(history) => {
                    eprintln!("  Backend history for {}:", history.conversation_id);
                    for entry in &history.history {
                        eprintln!("  [{}] {}", entry.role, crate::util::ellipsize(&entry.content, 100));
                    }
                }
                Err(e) => eprintln!("  [error] {}", e),
            },
            None => eprintln!("  No conversation yet."),
        },

        "/forget" => {
            if let Some(id) = conversation.session().conversation_id().map(str::to_string) {
                match service.forget(&id).await {
                    Ok(message) => eprintln!("  {}", message),
                    Err(e) => eprintln!("  [error] {}", e),
                }
            }
            conversation.reset();
            eprintln!("  Started a new conversation.");
        }

        "/new" => {
            conversation.reset();
            eprintln!("  Started a new conversation.");
        }

        "/help" => {
            eprintln!("Slash commands:");
            eprintln!("  /status            Show endpoint, turn count and conversation id");
            eprintln!("  /sources           Reprint the sources of the last answer");
            eprintln!("  /history           Show the backend's copy of this conversation");
            eprintln!("  /forget            Drop this conversation on the backend and start over");
            eprintln!("  /new               Start a new conversation");
            eprintln!("  /help              Show this help");
            eprintln!("  /quit, quit, exit  End session");
        }

        _ => {
            eprintln!("Unknown command: {}. Type /help for commands.", cmd);
        }
    }
}

/// Plain-text bubble for one turn.
pub fn format_turn(turn: &Turn, show_timestamp: bool) -> String {
    let label = match turn.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    let mut out = if show_timestamp {
        format!("{} ({})\n", label, render::format_time(&turn.timestamp))
    } else {
        format!("{}\n", label)
    };
    for line in turn.content.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    if turn.has_sources() {
        out.push_str("  Sources:\n");
        for chip in render::chips(&turn.sources) {
            out.push_str(&format_chip(&chip));
            out.push('\n');
        }
    }
    out
}

pub fn format_chip(chip: &CitationChip) -> String {
    let marker = if chip.highlighted { '*' } else { '-' };
    format!(
        "    {} {} | {} | {}",
        marker, chip.name, chip.page, chip.relevance
    )
}
