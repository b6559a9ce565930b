//! Clear-cache command handler
//!
//! Deletes the path cache, the hash record and the extraction temp area so
//! the next collect starts with a full scan and recopies everything.

use anyhow::{bail, Result};

use rulesnap::infrastructure::{
    JsonHashRecordRepository, JsonPathCacheRepository, LocalFs, RunLock,
};
use rulesnap::ClearCacheUseCase;

use super::{load_config, GlobalArgs};
use crate::ui::context::UiContext;
use crate::ui::views::clean::render_clear_cache_result;

/// Execute the clear-cache command
pub fn cmd_clear_cache(args: &GlobalArgs) -> Result<()> {
    let ui = UiContext::new(args.json, args.verbose, args.color);
    let loaded = load_config(args, ui.color, ui.unicode)?;
    let config = &loaded.config;

    let output_root = config.output.root.clone();
    // Refuse to pull caches out from under a running collect.
    let _lock = RunLock::acquire(&output_root)?;

    let use_case = ClearCacheUseCase::new(
        JsonPathCacheRepository::in_output(&output_root),
        JsonHashRecordRepository::in_output(&output_root),
        LocalFs::new(),
    );
    let result = use_case.execute(&config.temp_root());

    if ui.json {
        let mut value = serde_json::to_value(&result)?;
        if let Some(map) = value.as_object_mut() {
            map.insert("event".to_string(), "clear_cache_complete".into());
        }
        println!("{}", value);
    } else {
        print!("{}", render_clear_cache_result(&result, ui.color, ui.unicode));
    }

    if !result.is_success() {
        bail!("failed to clear {} cache item(s)", result.errors.len());
    }
    Ok(())
}
