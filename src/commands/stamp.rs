//! Stamp command handler
//!
//! Prints nothing but the rendering on stdout, so it can be used directly as
//! `build_flags = !fwkit stamp`.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use fwkit::application::{compute_stamp, StampFormat, StampOptions};
use fwkit::infrastructure::{write_if_changed, WriteStatus};
use fwkit::presentation::create_source_control;

use crate::commands::{build_env, Globals};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::stamp::render_stamp_written;

const COMMAND: &str = "stamp";

pub fn cmd_stamp(
    globals: &Globals,
    env: Option<String>,
    format: StampFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = globals.load_config(COMMAND)?;
    let ui = &globals.ui;

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let env = build_env(env, std::env::var("PIOENV").ok(), &config);
    let options = StampOptions {
        platformio_ini: config.platformio_ini_in(&globals.project_dir),
        env,
        fallbacks: config.version.clone(),
        source_date_epoch: std::env::var("SOURCE_DATE_EPOCH").ok(),
    };
    let scm = create_source_control(&globals.project_dir);
    let stamp = compute_stamp(&options, &scm);
    let rendered = stamp.render(format);

    let Some(output) = output else {
        if ui.json {
            let _ = emit_event(&CompleteEvent::success(
                COMMAND,
                json!({
                    "env": stamp.env,
                    "version": stamp.version.to_string(),
                    "build_time": stamp.build_time.to_string(),
                }),
            ));
        } else {
            print!("{}", rendered);
        }
        return Ok(());
    };

    let output = globals.resolve(&output);
    let status = write_if_changed(&output, rendered.as_bytes())?;

    if ui.json {
        let _ = emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "env": stamp.env,
                "version": stamp.version.to_string(),
                "build_time": stamp.build_time.to_string(),
                "output": output.display().to_string(),
                "written": status == WriteStatus::Written,
            }),
        ));
    } else {
        eprint!(
            "{}",
            render_stamp_written(
                &output,
                &stamp.version.to_string(),
                status,
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}
