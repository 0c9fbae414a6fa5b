use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff between the header on disk and the freshly generated one.
///
/// Only hunks with `context` surrounding lines are shown; generated array
/// headers run to thousands of lines.
pub fn render_header_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let width = old.lines().count().max(new.lines().count()).max(1).to_string().len();

    let mut out = String::new();
    push_line(&mut out, &format!("--- a/{}", path), Style::Header, supports_color);
    push_line(&mut out, &format!("+++ b/{}", path), Style::Header, supports_color);

    for group in diff.grouped_ops(2) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let (line_no, sign, style) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), "-", Style::Removed),
                    ChangeTag::Insert => (change.new_index(), "+", Style::Added),
                    ChangeTag::Equal => (change.new_index(), " ", Style::Context),
                };
                let line_no = line_no
                    .map(|i| format!("{:>width$}", i + 1, width = width))
                    .unwrap_or_else(|| " ".repeat(width));
                let value = change.value().trim_end_matches('\n');
                push_line(
                    &mut out,
                    &format!("{line_no} {sign} {value}"),
                    style,
                    supports_color,
                );
            }
        }
        push_line(&mut out, "...", Style::Context, supports_color);
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Header,
    Added,
    Removed,
    Context,
}

fn push_line(out: &mut String, s: &str, style: Style, supports_color: bool) {
    if supports_color {
        let color = match style {
            Style::Header => theme::colors::INFO,
            Style::Added => theme::colors::SUCCESS,
            Style::Removed => theme::colors::ERROR,
            Style::Context => theme::colors::DIM,
        };
        out.push_str(&format!("{}", s.with(color)));
    } else {
        out.push_str(s);
    }
    out.push('\n');
}
