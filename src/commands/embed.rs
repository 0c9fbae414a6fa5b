//! Embed command handler

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use fwkit::application::{embed_assets, EmbedOptions, EmbedReport};
use fwkit::domain::value_objects::HeaderDialect;

use crate::commands::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ItemEvent, StartEvent, WarningEvent};
use crate::ui::views::embed::{
    render_embed_header, render_embed_items, render_embed_summary, render_stale_headers,
    status_label,
};

const COMMAND: &str = "embed";

/// Returns `false` when `--check` found stale headers.
pub fn cmd_embed(
    globals: &Globals,
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    idf: bool,
    check: bool,
) -> Result<bool> {
    let config = globals.load_config(COMMAND)?;
    let ui = &globals.ui;

    let data_dir = globals.resolve(&data_dir.unwrap_or(config.embed.data_dir));
    let output_dir = globals.resolve(&output_dir.unwrap_or(config.embed.include_dir));
    let dialect = HeaderDialect::from_idf_flag(idf);

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    } else {
        print!(
            "{}",
            render_embed_header(
                &data_dir.display().to_string(),
                &output_dir.display().to_string(),
                &dialect.to_string(),
                check,
                ui.color,
                ui.unicode,
            )
        );
    }

    let options = EmbedOptions::new(&data_dir, &output_dir)
        .with_files(config.embed.files)
        .with_dialect(dialect)
        .with_check(check);
    let report = embed_assets(&options)?;

    if ui.json {
        emit_json(&report, check);
    } else {
        print!("{}", render_embed_items(&report, ui.color, ui.unicode));
        if check {
            print!(
                "{}",
                render_stale_headers(&report, ui.detailed(), ui.color, ui.unicode)
            );
        }
        print!("{}", render_embed_summary(&report, check, ui.color, ui.unicode));
    }

    Ok(!(check && report.is_stale()))
}

fn emit_json(report: &EmbedReport, check: bool) {
    for entry in &report.embedded {
        let _ = emit_event(&ItemEvent::new(
            COMMAND,
            json!({
                "kind": "asset",
                "file": entry.filename,
                "original_size": entry.original_size,
                "compressed_size": entry.compressed_size,
                "mime": entry.mime,
            }),
        ));
    }
    for name in &report.skipped {
        let _ = emit_event(&WarningEvent::new(
            COMMAND,
            format!("{} not found, skipped", name),
        ));
    }
    for header in &report.headers {
        let _ = emit_event(&ItemEvent::new(
            COMMAND,
            json!({
                "kind": "header",
                "path": header.path.display().to_string(),
                "status": status_label(header.status),
            }),
        ));
    }

    let summary = json!({
        "embedded": report.embedded.len(),
        "skipped": report.skipped.len(),
        "written": report.written_count(),
        "unchanged": report.unchanged_count(),
        "stale": report.stale().count(),
    });
    let event = if check && report.is_stale() {
        CompleteEvent::failure(COMMAND, summary)
    } else {
        CompleteEvent::success(COMMAND, summary)
    };
    let _ = emit_event(&event);
}
