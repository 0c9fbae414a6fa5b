use fwkit::application::PrebuildReport;

use crate::ui::blocks::item::StatusLine;
use crate::ui::primitives::icon::Icon;

pub fn render_prebuild(report: &PrebuildReport, supports_color: bool, supports_unicode: bool) -> String {
    match report {
        PrebuildReport::NoDataDir { data_dir } => StatusLine::new(
            Icon::Warning,
            format!(
                "{} not found. Web assets will not be embedded.",
                data_dir.display()
            ),
        )
        .render(supports_color, supports_unicode),
        PrebuildReport::Embedded { dialect, output } => {
            // Child output is relayed as-is; it carries its own formatting.
            let mut out = output.stdout.clone();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            for line in output.stderr_lines() {
                out.push_str(
                    &StatusLine::new(Icon::Warning, format!("embed: {}", line))
                        .render(supports_color, supports_unicode),
                );
            }
            out.push_str(
                &StatusLine::new(Icon::Success, "web assets embedded")
                    .detail(dialect.to_string())
                    .render(supports_color, supports_unicode),
            );
            out
        }
    }
}
