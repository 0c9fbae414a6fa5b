//! Embed Use Case
//!
//! Turns allow-listed web assets into C headers:
//! 1. Compress each present asset
//! 2. Render and write `embedded_<stem>.h`
//! 3. Render and write the `embedded_web_assets.h` registry
//!
//! In check mode nothing is written; stale headers are reported instead.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_ASSET_FILES;
use crate::domain::entities::{EmbeddedAsset, GeneratedHeader};
use crate::domain::services::HeaderRenderer;
use crate::domain::value_objects::{AssetIdentifier, HeaderDialect};
use crate::error::{FwkitError, FwkitResult};
use crate::infrastructure::fs::{write_if_changed, WriteStatus};

/// Options for the embed operation
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    /// Directory holding the web sources
    pub data_dir: PathBuf,
    /// Directory receiving the generated headers
    pub output_dir: PathBuf,
    /// Allow-list, in registry order
    pub files: Vec<String>,
    pub dialect: HeaderDialect,
    /// Report stale headers without writing
    pub check: bool,
}

impl EmbedOptions {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            files: DEFAULT_ASSET_FILES.iter().map(|s| s.to_string()).collect(),
            dialect: HeaderDialect::default(),
            check: false,
        }
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    pub fn with_dialect(mut self, dialect: HeaderDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

/// What happened to one generated header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// New content was written
    Written,
    /// On-disk content already matched
    Unchanged,
    /// Check mode: on-disk content differs or is missing
    Stale,
}

/// A generated header and its outcome
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub path: PathBuf,
    pub status: HeaderStatus,
    /// Previous on-disk content, kept for stale headers only
    pub previous: Option<String>,
    /// Rendered content, kept for stale headers only
    pub content: Option<String>,
}

/// An asset that made it into the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedEntry {
    pub filename: String,
    pub original_size: usize,
    pub compressed_size: usize,
    pub mime: String,
}

impl EmbeddedEntry {
    /// Compressed size as a percentage of the original
    pub fn ratio_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.compressed_size as f64 * 100.0 / self.original_size as f64
    }
}

/// Result of the embed operation
#[derive(Debug, Clone, Default)]
pub struct EmbedReport {
    /// Assets compressed into headers, in registry order
    pub embedded: Vec<EmbeddedEntry>,
    /// Allow-listed files absent from the data directory
    pub skipped: Vec<String>,
    /// Every header touched, master last
    pub headers: Vec<HeaderEntry>,
}

impl EmbedReport {
    pub fn written_count(&self) -> usize {
        self.count(HeaderStatus::Written)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(HeaderStatus::Unchanged)
    }

    pub fn stale(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.headers
            .iter()
            .filter(|h| h.status == HeaderStatus::Stale)
    }

    pub fn is_stale(&self) -> bool {
        self.stale().next().is_some()
    }

    fn count(&self, status: HeaderStatus) -> usize {
        self.headers.iter().filter(|h| h.status == status).count()
    }
}

/// Embed the allow-listed assets of `options.data_dir`.
///
/// Missing files are skipped. The first asset that cannot be read,
/// compressed or written aborts the run; headers already written stay.
pub fn embed_assets(options: &EmbedOptions) -> FwkitResult<EmbedReport> {
    if !options.data_dir.is_dir() {
        return Err(FwkitError::DirectoryNotFound {
            path: options.data_dir.clone(),
        });
    }
    validate_asset_names(&options.files)?;
    if !options.check {
        fs::create_dir_all(&options.output_dir)?;
    }

    let renderer = HeaderRenderer::new(options.dialect);
    let mut report = EmbedReport::default();
    let mut assets: Vec<EmbeddedAsset> = Vec::new();

    for filename in &options.files {
        let source = options.data_dir.join(filename);
        if !source.is_file() {
            log::debug!("{} not present, skipping", source.display());
            report.skipped.push(filename.clone());
            continue;
        }

        let processing = |reason: String| FwkitError::AssetProcessing {
            file: filename.clone(),
            reason,
        };

        let raw = fs::read(&source).map_err(|e| processing(e.to_string()))?;
        let asset = EmbeddedAsset::compress(filename.as_str(), &raw)
            .map_err(|e| processing(e.to_string()))?;
        log::debug!(
            "{}: {} -> {} bytes",
            filename,
            asset.original_size(),
            asset.compressed_size()
        );

        let header = renderer.render_asset(&asset);
        let entry = emit(&header, &options.output_dir, options.check)
            .map_err(|e| processing(e.to_string()))?;
        report.headers.push(entry);

        report.embedded.push(EmbeddedEntry {
            filename: filename.clone(),
            original_size: asset.original_size(),
            compressed_size: asset.compressed_size(),
            mime: asset.mime().to_string(),
        });
        assets.push(asset);
    }

    let master = renderer.render_master(&assets);
    let entry =
        emit(&master, &options.output_dir, options.check).map_err(|e| FwkitError::AssetProcessing {
            file: master.file_name().to_string(),
            reason: e.to_string(),
        })?;
    report.headers.push(entry);

    Ok(report)
}

/// Reject allow-lists that cannot produce compilable headers.
///
/// Names end up inside C string literals and each one needs its own header
/// file and symbol prefix. Checked before anything is written.
fn validate_asset_names(files: &[String]) -> FwkitResult<()> {
    let mut headers: HashMap<String, &str> = HashMap::new();
    let mut identifiers: HashMap<AssetIdentifier, &str> = HashMap::new();

    for filename in files {
        let rejected = |reason: String| FwkitError::AssetProcessing {
            file: filename.clone(),
            reason,
        };

        if let Some(c) = filename
            .chars()
            .find(|&c| c == '"' || c == '\\' || c.is_control())
        {
            return Err(rejected(format!(
                "{:?} cannot appear in a C string literal",
                c
            )));
        }

        let header = EmbeddedAsset::header_file_name_for(filename);
        if let Some(other) = headers.insert(header.clone(), filename) {
            return Err(rejected(format!("{} is also generated for '{}'", header, other)));
        }

        let ident = AssetIdentifier::from_filename(filename);
        if let Some(other) = identifiers.insert(ident.clone(), filename) {
            return Err(rejected(format!(
                "symbol prefix '{}' is also used by '{}'",
                ident, other
            )));
        }
    }

    Ok(())
}

fn emit(header: &GeneratedHeader, output_dir: &Path, check: bool) -> FwkitResult<HeaderEntry> {
    let path = header.path_in(output_dir);

    if check {
        let previous = fs::read_to_string(&path).ok();
        let status = if previous.as_deref() == Some(header.content()) {
            HeaderStatus::Unchanged
        } else {
            HeaderStatus::Stale
        };
        let stale = status == HeaderStatus::Stale;
        return Ok(HeaderEntry {
            path,
            status,
            previous: if stale { previous } else { None },
            content: stale.then(|| header.content().to_string()),
        });
    }

    let status = match write_if_changed(&path, header.content().as_bytes())? {
        WriteStatus::Written => HeaderStatus::Written,
        WriteStatus::Unchanged => HeaderStatus::Unchanged,
    };
    Ok(HeaderEntry {
        path,
        status,
        previous: None,
        content: None,
    })
}
