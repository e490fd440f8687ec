//! List command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::store::{JsonFileStore, ProcessedStore};
use crate::youtube::watch_url;
use anyhow::Result;

/// Run the list command.
pub fn run_list(settings: &Settings) -> Result<()> {
    let path = settings.state_file();

    let store = match JsonFileStore::open(&path) {
        Ok(s) => s,
        Err(e) => {
            Output::error(&format!("Failed to read {}: {}", path.display(), e));
            return Err(e.into());
        }
    };

    if store.is_empty() {
        Output::info("No videos processed yet. Use 'tubenote run <url>' to add some.");
        return Ok(());
    }

    Output::header(&format!("Processed Videos ({})", store.len()));
    println!();
    for id in store.ids() {
        Output::list_item(&watch_url(&id));
    }
    println!();
    Output::kv("State file", &path.display().to_string());

    Ok(())
}
