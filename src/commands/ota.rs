//! OTA command handler

use anyhow::{Context, Result};
use serde_json::json;

use fwkit::application::{OtaOptions, OtaPlan};
use fwkit::domain::ports::{BuildEvent, BuildEventSink};
use fwkit::presentation::create_ota_use_case;

use crate::commands::Globals;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ItemEvent, StartEvent};
use crate::ui::views::ota::{
    render_exported, render_ota_header, render_ota_plan, render_ota_summary, render_step_started,
};

const COMMAND: &str = "ota";

pub struct OtaArgs {
    pub env: Option<String>,
    pub prefix: Option<String>,
    pub version: Option<String>,
    pub skip_firmware: bool,
    pub skip_fs: bool,
    pub dry_run: bool,
}

pub fn cmd_ota(globals: &Globals, args: OtaArgs) -> Result<()> {
    let config = globals.load_config(COMMAND)?;
    let ui = &globals.ui;

    let env = args.env.unwrap_or_else(|| config.project.env.clone());
    let mut options = OtaOptions::new(&globals.project_dir, env);
    options.platformio_ini = config.platformio_ini_in(&globals.project_dir);
    options.prefix = args.prefix.unwrap_or(config.ota.prefix);
    options.version = args.version;
    options.output_dir = globals.resolve(&config.ota.output_dir);
    options.build_tool = config.ota.build_tool;
    options.skip_firmware = args.skip_firmware;
    options.skip_fs = args.skip_fs;

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let use_case = create_ota_use_case();
    let plan = use_case
        .plan(&options)
        .context("resolving firmware version")?;

    if !ui.json {
        print!("{}", render_ota_header(&plan, ui.color, ui.unicode));
    }

    if args.dry_run {
        report_plan(ui, &plan);
        return Ok(());
    }

    let sink = OtaEventPrinter { ui };
    let result = use_case.execute(&plan, &sink)?;

    if ui.json {
        let _ = emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "version": plan.version,
                "artifacts": result.artifacts,
                "manifest": result.manifest.as_ref().map(|p| p.display().to_string()),
            }),
        ));
    } else {
        print!("{}", render_ota_summary(&result, ui.color, ui.unicode));
    }
    Ok(())
}

fn report_plan(ui: &UiContext, plan: &OtaPlan) {
    if !ui.json {
        print!("{}", render_ota_plan(plan, ui.color, ui.unicode));
        return;
    }

    for step in &plan.steps {
        let _ = emit_event(&ItemEvent::new(
            COMMAND,
            json!({
                "kind": step.kind,
                "command": step.command.to_string(),
                "source": step.source.display().to_string(),
                "destination": step.destination.display().to_string(),
                "planned": true,
            }),
        ));
    }
    let _ = emit_event(&CompleteEvent::success(
        COMMAND,
        json!({
            "version": plan.version,
            "dry_run": true,
            "manifest": plan.manifest.display().to_string(),
        }),
    ));
}

/// Streams build progress as it happens
struct OtaEventPrinter<'a> {
    ui: &'a UiContext,
}

impl BuildEventSink for OtaEventPrinter<'_> {
    fn on_event(&self, event: BuildEvent) {
        let ui = self.ui;
        match event {
            BuildEvent::StepStarted { kind, env, command } => {
                if ui.json {
                    let _ = emit_event(&ItemEvent::new(
                        COMMAND,
                        json!({"kind": kind, "env": env, "status": "building", "command": command}),
                    ));
                } else {
                    eprint!(
                        "{}",
                        render_step_started(&kind.to_string(), &command, ui.color, ui.unicode)
                    );
                }
            }
            BuildEvent::Exported { artifact } => {
                if ui.json {
                    let _ = emit_event(&ItemEvent::new(
                        COMMAND,
                        json!({"status": "exported", "artifact": artifact}),
                    ));
                } else {
                    print!("{}", render_exported(&artifact, ui.color, ui.unicode));
                }
            }
            BuildEvent::ManifestWritten { path } => {
                log::info!("manifest written to {}", path.display());
            }
        }
    }
}
