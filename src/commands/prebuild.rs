//! Prebuild command handler

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;

use fwkit::application::{PrebuildOptions, PrebuildReport};
use fwkit::presentation::create_prebuild_use_case;

use crate::commands::{build_env, Globals};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent, WarningEvent};
use crate::ui::views::prebuild::render_prebuild;

const COMMAND: &str = "prebuild";

pub fn cmd_prebuild(globals: &Globals, env: Option<String>, timeout: Option<u64>) -> Result<()> {
    let config = globals.load_config(COMMAND)?;
    let ui = &globals.ui;

    let options = PrebuildOptions {
        project_dir: globals.project_dir.clone(),
        data_dir: globals.resolve(&config.embed.data_dir),
        include_dir: globals.resolve(&config.embed.include_dir),
        platformio_ini: config.platformio_ini_in(&globals.project_dir),
        env: build_env(env, std::env::var("PIOENV").ok(), &config),
        timeout: Duration::from_secs(timeout.unwrap_or(config.embed.timeout_secs)),
        launcher: std::env::current_exe().context("locating the fwkit executable")?,
        config: globals.config_path.clone(),
    };

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let report = create_prebuild_use_case().execute(&options)?;

    if !ui.json {
        print!("{}", render_prebuild(&report, ui.color, ui.unicode));
        return Ok(());
    }

    match &report {
        PrebuildReport::NoDataDir { data_dir } => {
            let _ = emit_event(&WarningEvent::new(
                COMMAND,
                format!(
                    "{} not found. Web assets will not be embedded.",
                    data_dir.display()
                ),
            ));
            let _ = emit_event(&CompleteEvent::success(COMMAND, json!({"embedded": false})));
        }
        PrebuildReport::Embedded { dialect, output } => {
            for line in output.stderr_lines() {
                let _ = emit_event(&WarningEvent::new(COMMAND, format!("embed: {}", line)));
            }
            let _ = emit_event(&CompleteEvent::success(
                COMMAND,
                json!({"embedded": true, "dialect": dialect.to_string()}),
            ));
        }
    }
    Ok(())
}
