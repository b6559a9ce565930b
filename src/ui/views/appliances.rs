//! Appliance listing

use rulesnap::domain::entities::ApplianceSource;
use rulesnap::ApplianceDescriptor;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{pad_to_width, visible_width};

fn source_label(appliance: &ApplianceDescriptor) -> String {
    match appliance.source() {
        ApplianceSource::Local { .. } => appliance.search_specs().join(", "),
        ApplianceSource::Container { container, path } => format!("{}:{}", container, path),
    }
}

fn extension_label(appliance: &ApplianceDescriptor) -> String {
    appliance
        .extension()
        .extension()
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| "*".to_string())
}

/// Render the configured appliances as an aligned table
pub fn render_appliance_table<'a>(
    appliances: impl IntoIterator<Item = &'a ApplianceDescriptor>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rows: Vec<[String; 4]> = appliances
        .into_iter()
        .map(|a| {
            [
                a.name().to_string(),
                a.kind().to_string(),
                extension_label(a),
                source_label(a),
            ]
        })
        .collect();

    let mut out = format!(
        "{} {}\n",
        Icon::List.colored(supports_color, supports_unicode),
        ColoredText::info(format!("{} appliances", rows.len()))
            .bold()
            .render(supports_color)
    );

    let headers = ["NAME", "KIND", "EXT", "SOURCE"];
    let mut widths = headers.map(visible_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visible_width(cell));
        }
    }

    let format_row = |cells: [&str; 4]| {
        let line = format!(
            "  {}  {}  {}  {}",
            pad_to_width(cells[0], widths[0]),
            pad_to_width(cells[1], widths[1]),
            pad_to_width(cells[2], widths[2]),
            cells[3]
        );
        format!("{}\n", line.trim_end())
    };

    out.push_str(&ColoredText::dim(format_row(headers)).render(supports_color));
    for row in &rows {
        out.push_str(&format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    out
}
