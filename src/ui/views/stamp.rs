use std::path::Path;

use fwkit::infrastructure::fs::WriteStatus;

use crate::ui::blocks::item::StatusLine;
use crate::ui::primitives::icon::Icon;

pub fn render_stamp_written(
    path: &Path,
    version: &str,
    status: WriteStatus,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, detail) = match status {
        WriteStatus::Written => (Icon::Success, "written"),
        WriteStatus::Unchanged => (Icon::Skipped, "unchanged"),
    };
    StatusLine::new(icon, format!("{} ({})", path.display(), version))
        .detail(detail)
        .render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_file_is_marked() {
        let rendered = render_stamp_written(
            Path::new("include/fw_version.h"),
            "1.0.0+abc",
            WriteStatus::Unchanged,
            false,
            false,
        );
        assert_eq!(rendered, "  [SKIP] include/fw_version.h (1.0.0+abc)  unchanged\n");
    }
}
