//! Clear-cache command UI views

use rulesnap::ClearCacheResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the outcome of `rulesnap clear-cache`
pub fn render_clear_cache_result(
    result: &ClearCacheResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let (icon, title) = if !result.is_success() {
        (Icon::Error, ColoredText::error("Cache partially cleared"))
    } else if result.removed.is_empty() {
        (Icon::Success, ColoredText::success("Nothing to clear"))
    } else {
        (Icon::Trash, ColoredText::success("Cache cleared"))
    };
    out.push_str(&format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        title.bold().render(supports_color)
    ));

    for path in &result.removed {
        out.push_str(&format!("  - {}\n", path.display()));
    }
    for path in &result.missing {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("- {} (not present)", path.display())).render(supports_color)
        ));
    }
    for error in &result.errors {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            error
        ));
    }

    out
}
