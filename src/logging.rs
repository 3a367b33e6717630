use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing::Level;

/// Sends log records to `path`, appending.
///
/// Without a path nothing is installed and every record is dropped: the
/// terminal belongs to the picker while it runs.
pub fn init(path: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
