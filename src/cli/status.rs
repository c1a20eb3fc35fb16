// src/cli/status.rs — Service status display

use crate::client::{AnswerService, HttpAnswerService};
use crate::infra::paths;

/// Check `/health` and print what the service reports.
pub async fn run_health(service: &HttpAnswerService) -> anyhow::Result<()> {
    println!("haqooq v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("  Endpoint:   {}", service.endpoint());

    let config_path = paths::config_file_path();
    if config_path.exists() {
        println!("  Config:     {} (loaded)", config_path.display());
    } else {
        println!("  Config:     (using defaults)");
    }

    match service.health().await {
        Ok(health) => {
            println!("  Service:    {} ({})", health.status, health.message);
            Ok(())
        }
        Err(e) => {
            println!("  Service:    unreachable");
            Err(e.into())
        }
    }
}

/// Print `/memory/stats` as pretty JSON.
pub async fn run_stats(service: &HttpAnswerService) -> anyhow::Result<()> {
    let stats = service.stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
