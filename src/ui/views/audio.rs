use fwkit::application::PcmConversion;

use crate::ui::blocks::item::StatusLine;
use crate::ui::primitives::icon::Icon;

pub fn render_conversion(conversion: &PcmConversion, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    if let Some(mismatch) = &conversion.rate_mismatch {
        out.push_str(
            &StatusLine::new(
                Icon::Warning,
                format!(
                    "sample rate is {} Hz, expected {} Hz",
                    mismatch.actual, mismatch.expected
                ),
            )
            .render(supports_color, supports_unicode),
        );
    }
    out.push_str(
        &StatusLine::new(
            Icon::Success,
            format!(
                "Wrote {} ({} bytes)",
                conversion.output.display(),
                conversion.bytes_written
            ),
        )
        .render(supports_color, supports_unicode),
    );
    out
}
