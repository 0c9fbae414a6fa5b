use fwkit::application::{EmbedReport, HeaderStatus};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::item::StatusLine;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::components::diff::render_header_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::format_bytes;

pub fn render_embed_header(
    data_dir: &str,
    output_dir: &str,
    dialect: &str,
    check: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if check { "Checking embedded assets" } else { "Embedding web assets" };
    let mut header = CommandHeader::new(Icon::Embed, title);
    header.add("Data", data_dir);
    header.add("Output", output_dir);
    header.add("Dialect", dialect);
    header.render(supports_color, supports_unicode)
}

/// Per-asset lines: sizes, compression ratio, skipped files.
pub fn render_embed_items(report: &EmbedReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for entry in &report.embedded {
        out.push_str(
            &StatusLine::new(Icon::Success, entry.filename.as_str())
                .detail(format!(
                    "{} -> {} ({:.1}%)",
                    format_bytes(entry.original_size as u64),
                    format_bytes(entry.compressed_size as u64),
                    entry.ratio_percent()
                ))
                .render(supports_color, supports_unicode),
        );
    }
    for name in &report.skipped {
        out.push_str(
            &StatusLine::new(Icon::Skipped, name.as_str())
                .detail("not found, skipped")
                .render(supports_color, supports_unicode),
        );
    }
    out
}

/// Stale headers with an optional unified diff each.
pub fn render_stale_headers(
    report: &EmbedReport,
    show_diff: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for entry in report.stale() {
        let path = entry.path.display().to_string();
        let detail = if entry.previous.is_some() { "out of date" } else { "missing" };
        out.push_str(
            &StatusLine::new(Icon::Diff, path.as_str())
                .detail(detail)
                .render(supports_color, supports_unicode),
        );
        if show_diff {
            let old = entry.previous.as_deref().unwrap_or("");
            let new = entry.content.as_deref().unwrap_or("");
            out.push_str(&render_header_diff(&path, old, new, supports_color));
        }
    }
    out
}

pub fn render_embed_summary(
    report: &EmbedReport,
    check: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if check {
        let stale = report.stale().count();
        if stale == 0 {
            let mut summary = ResultSummary::success("Embedded headers are up to date");
            summary.add_stat("headers checked", report.headers.len());
            return summary.render(supports_color, supports_unicode);
        }
        let mut summary = ResultSummary::partial("Embedded headers are out of date");
        summary.add_stat("stale headers", stale);
        summary.with_next_step("run `fwkit embed` and commit the regenerated headers");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = ResultSummary::success("Embed complete");
    summary.add_stat("assets embedded", report.embedded.len());
    summary.add_stat("headers written", report.written_count());
    summary.add_stat("headers unchanged", report.unchanged_count());
    for name in &report.skipped {
        summary.add_warning(format!("{} not found in data directory", name));
    }
    summary.render(supports_color, supports_unicode)
}

pub(crate) fn status_label(status: HeaderStatus) -> &'static str {
    match status {
        HeaderStatus::Written => "written",
        HeaderStatus::Unchanged => "unchanged",
        HeaderStatus::Stale => "stale",
    }
}
