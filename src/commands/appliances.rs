//! Appliances command handler

use anyhow::{Context, Result};
use serde_json::json;

use super::{load_config, GlobalArgs};
use crate::ui::context::UiContext;
use crate::ui::views::appliances::render_appliance_table;

/// List the appliances the current configuration would collect
pub fn cmd_appliances(args: &GlobalArgs) -> Result<()> {
    let ui = UiContext::new(args.json, args.verbose, args.color);
    let loaded = load_config(args, ui.color, ui.unicode)?;
    let registry = loaded
        .config
        .registry()
        .context("invalid appliance configuration")?;

    if ui.json {
        println!("{}", json!({ "appliances": loaded.config.appliances }));
    } else {
        print!("{}", render_appliance_table(registry.iter(), ui.color, ui.unicode));
    }
    Ok(())
}
