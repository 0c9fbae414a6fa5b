//! Asset Identifier Value Object
//!
//! A C identifier derived from an asset filename. Used as the prefix of the
//! generated `_data`, `_size`, `_original_size` and `_mime` symbols.

use std::fmt;
use std::path::Path;

/// C-safe identifier for an embedded asset
///
/// `wifi-setup.html` becomes `wifi_setup`, `app.min.js` becomes `app_min`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetIdentifier(String);

impl AssetIdentifier {
    /// Derive the identifier from a filename's stem.
    ///
    /// Every non-alphanumeric ASCII character becomes `_`. A leading digit
    /// gets a `_` prefix so the result is always a valid C identifier.
    pub fn from_filename(filename: &str) -> Self {
        let stem = Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut ident: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        if ident.is_empty() {
            ident.push('_');
        } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }

        Self(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol holding the compressed bytes
    pub fn data_symbol(&self) -> String {
        format!("{}_data", self.0)
    }

    pub fn size_symbol(&self) -> String {
        format!("{}_size", self.0)
    }

    pub fn original_size_symbol(&self) -> String {
        format!("{}_original_size", self.0)
    }

    pub fn mime_symbol(&self) -> String {
        format!("{}_mime", self.0)
    }
}

impl fmt::Display for AssetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
