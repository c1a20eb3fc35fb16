// src/cli/disclaimer.rs — Disclaimer flag management

use crate::infra::prefs::Prefs;
use crate::landing;

/// Print the disclaimer and mark it seen, or with `reset` clear the flag so
/// the banner shows again on next start.
pub fn run_disclaimer(prefs: &Prefs, reset: bool) -> anyhow::Result<()> {
    if reset {
        prefs.clear_disclaimer()?;
        println!("The disclaimer will be shown on next start.");
        return Ok(());
    }

    println!("{}", landing::DISCLAIMER);
    prefs.mark_disclaimer_seen()?;
    Ok(())
}
