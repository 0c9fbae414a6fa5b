//! EmbeddedAsset entity - one web asset compiled into firmware
//!
//! Holds the gzip-compressed payload plus everything the registry entry
//! needs (identifier, sizes, MIME type).

use crate::domain::services::compression::gzip_compress;
use crate::domain::value_objects::{AssetIdentifier, MimeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedAsset {
    filename: String,
    identifier: AssetIdentifier,
    mime: MimeType,
    original_size: usize,
    data: Vec<u8>,
}

impl EmbeddedAsset {
    /// Compress raw file content into an embeddable asset.
    pub fn compress(filename: impl Into<String>, raw: &[u8]) -> std::io::Result<Self> {
        let filename = filename.into();
        let data = gzip_compress(raw)?;
        Ok(Self {
            identifier: AssetIdentifier::from_filename(&filename),
            mime: MimeType::for_filename(&filename),
            original_size: raw.len(),
            data,
            filename,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn identifier(&self) -> &AssetIdentifier {
        &self.identifier
    }

    pub fn mime(&self) -> MimeType {
        self.mime
    }

    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn compressed_size(&self) -> usize {
        self.data.len()
    }

    /// Compressed payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Name of the per-asset header, `embedded_<stem>.h`
    pub fn header_file_name(&self) -> String {
        Self::header_file_name_for(&self.filename)
    }

    /// Header name a file would get, without compressing it
    pub fn header_file_name_for(filename: &str) -> String {
        let stem = std::path::Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| AssetIdentifier::from_filename(filename).to_string());
        format!("embedded_{}.h", stem)
    }
}
