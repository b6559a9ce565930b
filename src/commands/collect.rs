//! Collect command handler
//!
//! Runs one incremental collection: lock the output directory, scan, sync,
//! print the summary, and always remove the extraction temp area.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use rulesnap::domain::ports::CollectEventSink;
use rulesnap::infrastructure::fs::rulesnap_home_dir;
use rulesnap::infrastructure::{
    default_strategies, DockerCli, GlobProber, JsonEventSink, JsonHashRecordRepository,
    JsonPathCacheRepository, LocalFs, RunLock,
};
use rulesnap::{CollectOptions, CollectUseCase, CollectionResult};

use super::{load_config, GlobalArgs};
use crate::ui::console_sink::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::collect::{render_collect_header, render_collect_summary, render_copied_files};

/// Exit status for a run stopped by Ctrl+C
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Execute the collect command
pub fn cmd_collect(args: &GlobalArgs, force: bool) -> Result<()> {
    let ui = UiContext::new(args.json, args.verbose, args.color);
    let loaded = load_config(args, ui.color, ui.unicode)?;
    let config = &loaded.config;

    let registry = config
        .registry()
        .context("invalid appliance configuration")?;

    let output_root = config.output.root.clone();
    let _lock = RunLock::acquire(&output_root)?;

    let temp_root = config.temp_root();
    let cancel = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(cancel.clone(), temp_root.clone())?;

    if !ui.json {
        print!(
            "{}",
            render_collect_header(
                loaded.source.as_deref(),
                &output_root,
                force,
                registry.len(),
                ui.color,
                ui.unicode
            )
        );
    }

    let runtime = config.container.runtime.as_str();
    let use_case = CollectUseCase::new(
        GlobProber::new(),
        LocalFs::new(),
        DockerCli::new(runtime),
        default_strategies(runtime, config.container.extract_timeout()),
        JsonPathCacheRepository::in_output(&output_root),
        JsonHashRecordRepository::in_output(&output_root),
    );

    let options = CollectOptions::from_config(config, rulesnap_home_dir())
        .with_force(force)
        .with_cancel(cancel);

    let console = (!ui.json).then(|| Arc::new(ConsoleEventSink::stderr(ui)));
    let sink: Arc<dyn CollectEventSink> = match &console {
        Some(console) => console.clone(),
        None => Arc::new(JsonEventSink::stdout()),
    };

    let outcome = use_case.execute_with_events(&registry, &options, sink);

    if let Some(console) = &console {
        console.finish();
    }
    remove_temp_tree(&temp_root);

    let result = outcome.context("collection failed")?;
    print_result(&result, &ui)
}

fn print_result(result: &CollectionResult, ui: &UiContext) -> Result<()> {
    if ui.json {
        let mut value = serde_json::to_value(result).context("failed to serialize result")?;
        if let Some(map) = value.as_object_mut() {
            map.insert("event".to_string(), "complete".into());
        }
        println!("{}", value);
        return Ok(());
    }

    println!();
    print!("{}", render_collect_summary(result, ui.color, ui.unicode));
    if ui.verbose > 0 && !result.copied.is_empty() {
        print!("{}", render_copied_files(result, ui.color, ui.unicode));
    }
    Ok(())
}

/// First Ctrl+C asks the run to stop at the next checkpoint; a second one
/// cleans the temp area and exits immediately.
fn install_interrupt_handler(cancel: Arc<AtomicBool>, temp_root: PathBuf) -> Result<()> {
    ctrlc::set_handler(move || {
        if cancel.swap(true, Ordering::SeqCst) {
            remove_temp_tree(&temp_root);
            std::process::exit(i32::from(INTERRUPTED_EXIT_CODE));
        }
        eprintln!("\nInterrupted, stopping after the current appliance or file (Ctrl+C again to abort)");
    })
    .context("failed to install Ctrl+C handler")
}

fn remove_temp_tree(temp_root: &Path) {
    match fs::remove_dir_all(temp_root) {
        Ok(()) => tracing::debug!(path = %temp_root.display(), "temp area removed"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %temp_root.display(), error = %e, "failed to remove temp area"),
    }
}
