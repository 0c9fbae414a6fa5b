//! fs-patch command handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde_json::json;

use fwkit::application::{apply_fs_patch, FsPatchOptions, PatchDestination};

use crate::commands::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::fs_patch::{render_fs_patch, status_label};

const COMMAND: &str = "fs-patch";

pub struct FsPatchArgs {
    pub builder: Option<PathBuf>,
    pub platform_dir: Option<PathBuf>,
    pub targets: Vec<String>,
    pub in_place: bool,
    pub output: Option<PathBuf>,
}

pub fn cmd_fs_patch(globals: &Globals, args: FsPatchArgs) -> Result<()> {
    let ui = &globals.ui;

    let builder = match (args.builder, args.platform_dir) {
        (Some(builder), _) => globals.resolve(&builder),
        (None, Some(dir)) => FsPatchOptions::builder_in_platform(&globals.resolve(&dir)),
        (None, None) => bail!("one of --builder or --platform-dir is required"),
    };
    let destination = match (args.in_place, args.output) {
        (true, _) => PatchDestination::InPlace,
        (false, Some(output)) => PatchDestination::Output(globals.resolve(&output)),
        (false, None) => bail!("one of --in-place or --output is required"),
    };
    let options = FsPatchOptions {
        builder,
        // No --target means the caller already decided a filesystem build is running.
        targets: if args.targets.is_empty() {
            None
        } else {
            Some(args.targets)
        },
        destination,
    };

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let report = apply_fs_patch(&options)?;

    if ui.json {
        let _ = emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "builder": report.builder.display().to_string(),
                "status": status_label(report.status),
                "written": report.written.as_ref().map(|p| p.display().to_string()),
            }),
        ));
    } else {
        print!("{}", render_fs_patch(&report, ui.color, ui.unicode));
    }
    Ok(())
}
