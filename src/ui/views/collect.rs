//! Collect command UI views

use std::path::Path;

use rulesnap::CollectionResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{pad_to_width, Panel, PanelStyle};

const LABEL_WIDTH: usize = 13;

/// Render the collect command header
pub fn render_collect_header(
    config_source: Option<&Path>,
    output_root: &Path,
    force: bool,
    appliance_count: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Collect, "rulesnap collect");
    header.add(
        "Config",
        config_source
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    );
    header.add("Output", output_root.display().to_string());
    header.add("Appliances", appliance_count.to_string());
    header.add("Mode", if force { "full rescan" } else { "incremental" });
    header.render(supports_color, supports_unicode)
}

fn summary_rows(result: &CollectionResult) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (
            "Targets",
            format!(
                "{} ({} local, {} container)",
                result.total, result.local, result.container
            ),
        ),
        (
            "Discovery",
            format!(
                "{} cached, {} newly found",
                result.cached, result.newly_found
            ),
        ),
        (
            "Path cache",
            if result.used_cache { "used" } else { "rebuilt" }.to_string(),
        ),
        ("Changed", result.changed.to_string()),
        ("Unchanged", result.unchanged.to_string()),
        ("Copied", result.copied_count().to_string()),
    ];
    if result.failed > 0 {
        rows.push(("Copy failed", result.failed.to_string()));
    }
    if result.hash_failures > 0 {
        rows.push(("Unhashable", result.hash_failures.to_string()));
    }
    rows.push(("Elapsed", format!("{:.1}s", result.elapsed.as_secs_f64())));
    rows
}

/// Render the end-of-run summary table
pub fn render_collect_summary(
    result: &CollectionResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (style, icon, title) = if result.is_clean() {
        (
            PanelStyle::Success,
            Icon::Success,
            ColoredText::success("Collection complete"),
        )
    } else {
        (
            PanelStyle::Warning,
            Icon::Warning,
            ColoredText::warning("Collection finished with warnings"),
        )
    };

    let header = format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        title.bold().render(supports_color)
    );
    let mut panel = Panel::with_title(header).style(style);
    panel.add_empty();

    for (label, value) in summary_rows(result) {
        panel.add_line(format!("{}{}", pad_to_width(label, LABEL_WIDTH), value));
    }

    if !result.warnings.is_empty() {
        panel.add_empty();
        for warning in &result.warnings {
            panel.add_line(format!(
                "{} {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }
    }

    panel.render(supports_color, supports_unicode)
}

/// Render the destinations written this run (shown with `-v`)
pub fn render_copied_files(
    result: &CollectionResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for path in &result.copied {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(path.display().to_string()).render(supports_color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use insta::assert_snapshot;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample_result() -> CollectionResult {
        CollectionResult {
            total: 3,
            local: 2,
            container: 1,
            cached: 1,
            newly_found: 2,
            changed: 1,
            unchanged: 1,
            copied: vec![PathBuf::from("collected_rules/alpha/new.rule")],
            failed: 0,
            hash_failures: 1,
            warnings: vec!["waf: container is not running".to_string()],
            used_cache: true,
            elapsed: Duration::from_millis(1500),
            timestamp: Local.with_ymd_and_hms(2026, 3, 1, 2, 0, 0).unwrap(),
        }
    }

    #[test]
    fn summary_table_snapshot() {
        let rendered = render_collect_summary(&sample_result(), false, false);
        assert_snapshot!(rendered, @r"
        +------------------------------------------+
        | [WARN] Collection finished with warnings |
        |                                          |
        | Targets      3 (2 local, 1 container)    |
        | Discovery    1 cached, 2 newly found     |
        | Path cache   used                        |
        | Changed      1                           |
        | Unchanged    1                           |
        | Copied       1                           |
        | Unhashable   1                           |
        | Elapsed      1.5s                        |
        |                                          |
        | [WARN] waf: container is not running     |
        +------------------------------------------+
        ");
    }

    #[test]
    fn clean_run_reports_success_without_failure_rows() {
        let mut result = sample_result();
        result.hash_failures = 0;
        result.warnings.clear();
        result.used_cache = false;

        let rendered = render_collect_summary(&result, false, true);
        assert!(rendered.contains("✓ Collection complete"));
        assert!(rendered.contains("rebuilt"));
        assert!(!rendered.contains("Unhashable"));
        assert!(!rendered.contains("Copy failed"));
    }

    #[test]
    fn header_shows_defaults_when_no_config_file() {
        let rendered =
            render_collect_header(None, Path::new("/srv/rules"), true, 7, false, false);
        assert!(rendered.contains("built-in defaults"));
        assert!(rendered.contains("/srv/rules"));
        assert!(rendered.contains("full rescan"));
    }

    #[test]
    fn copied_files_are_listed() {
        let rendered = render_copied_files(&sample_result(), false, false);
        assert_eq!(rendered, "  [>] collected_rules/alpha/new.rule\n");
    }
}
