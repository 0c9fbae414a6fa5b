use fwkit::application::{OtaPlan, OtaResult};
use fwkit::domain::entities::OtaArtifact;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::item::StatusLine;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::format_bytes;

pub fn render_ota_header(plan: &OtaPlan, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Build, "OTA build");
    header.add("Env", plan.env.as_str());
    header.add("Version", plan.version.as_str());
    header.add("Prefix", plan.prefix.as_str());
    header.render(supports_color, supports_unicode)
}

/// What `--dry-run` would do, one step per image.
pub fn render_ota_plan(plan: &OtaPlan, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    if plan.steps.is_empty() {
        out.push_str(
            &StatusLine::new(Icon::Skipped, "nothing to build")
                .detail("both images skipped")
                .render(supports_color, supports_unicode),
        );
        return out;
    }

    for step in &plan.steps {
        out.push_str(
            &StatusLine::new(Icon::Progress, step.kind.to_string())
                .detail(step.command.to_string())
                .note(format!(
                    "{} -> {}",
                    step.source.display(),
                    step.destination.display()
                ))
                .render(supports_color, supports_unicode),
        );
    }
    out.push_str(
        &StatusLine::new(Icon::Progress, "manifest")
            .detail(plan.manifest.display().to_string())
            .render(supports_color, supports_unicode),
    );
    out
}

pub fn render_step_started(kind: &str, command: &str, supports_color: bool, supports_unicode: bool) -> String {
    StatusLine::new(Icon::Progress, format!("building {}", kind))
        .detail(command)
        .render(supports_color, supports_unicode)
}

pub fn render_exported(artifact: &OtaArtifact, supports_color: bool, supports_unicode: bool) -> String {
    StatusLine::new(Icon::Success, artifact.exported.display().to_string())
        .detail(format_bytes(artifact.size))
        .note(artifact.sha256.as_str())
        .render(supports_color, supports_unicode)
}

pub fn render_ota_summary(result: &OtaResult, supports_color: bool, supports_unicode: bool) -> String {
    let mut summary = ResultSummary::success("OTA artifacts ready");
    summary.add_stat("images exported", result.artifacts.len());
    match &result.manifest {
        Some(path) => summary.with_next_step(format!("upload the images listed in {}", path.display())),
        None => summary.add_warning("no images exported, manifest not written"),
    }
    summary.render(supports_color, supports_unicode)
}
