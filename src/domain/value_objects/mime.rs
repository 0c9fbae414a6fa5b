//! MIME type lookup for embedded web assets.

use std::fmt;
use std::path::Path;

/// Content type served alongside an embedded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MimeType(&'static str);

impl MimeType {
    pub const OCTET_STREAM: MimeType = MimeType("application/octet-stream");

    const TABLE: &'static [(&'static str, &'static str)] = &[
        ("html", "text/html; charset=utf-8"),
        ("css", "text/css; charset=utf-8"),
        ("js", "application/javascript; charset=utf-8"),
        ("json", "application/json"),
        ("svg", "image/svg+xml"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("ico", "image/x-icon"),
    ];

    /// Look up the MIME type from the file extension (case-insensitive).
    pub fn for_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        ext.and_then(|ext| {
            Self::TABLE
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| MimeType(*mime))
        })
        .unwrap_or(Self::OCTET_STREAM)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_and_css_carry_charset() {
        assert_eq!(
            MimeType::for_filename("index.html").as_str(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            MimeType::for_filename("style.css").as_str(),
            "text/css; charset=utf-8"
        );
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(MimeType::for_filename("LOGO.PNG").as_str(), "image/png");
        assert_eq!(MimeType::for_filename("favicon.Ico").as_str(), "image/x-icon");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(MimeType::for_filename("gong.pcm"), MimeType::OCTET_STREAM);
        assert_eq!(MimeType::for_filename("README"), MimeType::OCTET_STREAM);
    }

    #[test]
    fn jpeg_long_extension_is_not_mapped() {
        // Only `.jpg` is in the table.
        assert_eq!(MimeType::for_filename("photo.jpeg"), MimeType::OCTET_STREAM);
    }
}
