use std::{fs, path::Path, time::Instant};

use anyhow::{Context, Result};

use super::{CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration to the current directory.
///
/// An existing file is left untouched and reported as a failure.
pub fn init() -> Result<CommandResult> {
    let start = Instant::now();
    let config_path = Path::new(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
        true
    };

    Ok(CommandResult {
        kind: CommandKind::Init,
        summary: CommandSummary::Init(InitSummary { created }),
        warnings: Vec::new(),
        notes: Vec::new(),
        elapsed: start.elapsed(),
    })
}
