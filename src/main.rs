// src/main.rs — Haqooq entry point

use std::sync::Arc;

use clap::Parser;

use haqooq::cli::{Cli, Commands};
use haqooq::client::HttpAnswerService;
use haqooq::infra::config::Config;
use haqooq::infra::prefs::Prefs;
use haqooq::infra::{logger, paths};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The full-screen view owns the terminal, so it logs to a file
    if matches!(cli.command, None | Some(Commands::Chat)) {
        if let Err(e) = logger::init_file_logging("warn", &paths::log_file_path()) {
            eprintln!("warning: {e:#}; logs are discarded for this session");
        }
    } else {
        logger::init_logging("warn");
    }

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    let config = config
        .with_env_overrides()
        .with_endpoint(cli.endpoint.as_deref());

    paths::ensure_dirs().await?;

    let prefs = Prefs::open_default();
    let service = Arc::new(HttpAnswerService::new(&config.service)?);
    tracing::info!("Answer service: {}", config.service.chat_url());

    match cli.command {
        None | Some(Commands::Chat) => {
            haqooq::tui::run_chat_view(service, &config, prefs).await
        }
        Some(Commands::Repl) => haqooq::cli::chat::run_repl(service, &prefs).await,
        Some(Commands::Ask { question, json }) => {
            haqooq::cli::ask::run_ask(service, &question.join(" "), json).await
        }
        Some(Commands::Health) => haqooq::cli::status::run_health(&service).await,
        Some(Commands::History { conversation_id }) => {
            haqooq::cli::memory::run_history(&service, &conversation_id).await
        }
        Some(Commands::Forget { conversation_id }) => {
            haqooq::cli::memory::run_forget(&service, &conversation_id).await
        }
        Some(Commands::Conversations) => {
            haqooq::cli::memory::run_conversations(&service).await
        }
        Some(Commands::Stats) => haqooq::cli::status::run_stats(&service).await,
        Some(Commands::Disclaimer { reset }) => {
            haqooq::cli::disclaimer::run_disclaimer(&prefs, reset)
        }
    }
}
