use fwkit::application::{FsPatchReport, FsPatchStatus};

use crate::ui::blocks::item::StatusLine;
use crate::ui::primitives::icon::Icon;

pub(crate) fn status_label(status: FsPatchStatus) -> &'static str {
    match status {
        FsPatchStatus::NotRequested => "not_requested",
        FsPatchStatus::BuilderMissing => "builder_missing",
        FsPatchStatus::Patched => "patched",
        FsPatchStatus::AlreadyApplied => "already_applied",
        FsPatchStatus::NeedleMissing => "needle_missing",
    }
}

pub fn render_fs_patch(report: &FsPatchReport, supports_color: bool, supports_unicode: bool) -> String {
    let builder = report.builder.display().to_string();
    let (icon, message) = match report.status {
        FsPatchStatus::NotRequested => (
            Icon::Skipped,
            "no filesystem target requested, nothing to do".to_string(),
        ),
        FsPatchStatus::BuilderMissing => (Icon::Skipped, format!("{} not found, skipped", builder)),
        FsPatchStatus::Patched => (Icon::Success, format!("patched LittleFS subtype check in {}", builder)),
        FsPatchStatus::AlreadyApplied => (Icon::Success, format!("{} already accepts subtype 0x83", builder)),
        FsPatchStatus::NeedleMissing => (
            Icon::Warning,
            format!("subtype check not found in {}, left unchanged", builder),
        ),
    };

    let mut line = StatusLine::new(icon, message);
    if let Some(written) = &report.written {
        line = line.note(format!("wrote {}", written.display()));
    }
    line.render(supports_color, supports_unicode)
}
