//! Init command implementation.

use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;
use logos_reasoning::DEFAULT_RULES_TOML;
use logos_store::SqliteIndex;
use std::fs;
use tracing::info;

/// Execute the init command.
///
/// Creates the directory layout, writes the bundled rulebook unless one
/// already exists, and initializes the SQLite index. Safe to run twice.
pub fn execute_init(settings: &Settings, formatter: &Formatter) -> Result<()> {
    settings.ensure_dirs()?;

    let rules_path = settings.rules_path();
    if rules_path.exists() {
        info!("Keeping existing rulebook at {}", rules_path.display());
    } else {
        fs::create_dir_all(&settings.config_dir)?;
        fs::write(&rules_path, DEFAULT_RULES_TOML)?;
        info!("Wrote default rulebook to {}", rules_path.display());
    }

    SqliteIndex::open(settings.index_path())?;

    println!(
        "{}",
        formatter.success("Initialized data/ and logs/ directories.")
    );
    Ok(())
}
