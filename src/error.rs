//! Error types for fwkit
//!
//! Library code returns `FwkitResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fwkit operations
pub type FwkitResult<T> = Result<T, FwkitError>;

/// Main error type for fwkit operations
#[derive(Error, Debug)]
pub enum FwkitError {
    /// Input directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Required key absent from an ini section
    #[error("{key} not set in [{section}] of {file}")]
    MissingConfigKey {
        key: String,
        section: String,
        file: PathBuf,
    },

    /// fwkit.toml could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Malformed RIFF/WAVE container
    #[error("invalid WAV file {path}: {reason}")]
    InvalidWav { path: PathBuf, reason: String },

    /// Well-formed WAV with a sample layout the firmware cannot play
    #[error("WAV must be mono 16-bit PCM (got {channels} channel(s), {bits_per_sample}-bit)")]
    UnsupportedAudio {
        channels: u16,
        bits_per_sample: u16,
    },

    /// A single web asset failed to embed; the whole run stops
    #[error("error processing {file}: {reason}")]
    AssetProcessing { file: String, reason: String },

    /// External program could not be started
    #[error("failed to run {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External program exited unsuccessfully
    #[error("{program} failed with exit code {}", display_code(.code))]
    CommandFailed { program: String, code: Option<i32> },

    /// External program exceeded its time budget and was killed
    #[error("{program} timed out after {secs}s")]
    CommandTimeout { program: String, secs: u64 },

    /// Build succeeded but the expected image is missing
    #[error("build artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl FwkitError {
    /// Process exit code to use when this error ends the run.
    ///
    /// Build tool failures propagate the tool's own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            FwkitError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Stable machine-readable code used in `--json` error events.
    pub fn code(&self) -> &'static str {
        match self {
            FwkitError::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
            FwkitError::FileNotFound { .. } => "FILE_NOT_FOUND",
            FwkitError::MissingConfigKey { .. } => "MISSING_CONFIG_KEY",
            FwkitError::InvalidConfig { .. } => "INVALID_CONFIG",
            FwkitError::InvalidWav { .. } => "INVALID_WAV",
            FwkitError::UnsupportedAudio { .. } => "UNSUPPORTED_AUDIO",
            FwkitError::AssetProcessing { .. } => "ASSET_PROCESSING",
            FwkitError::CommandSpawn { .. } => "COMMAND_SPAWN",
            FwkitError::CommandFailed { .. } => "COMMAND_FAILED",
            FwkitError::CommandTimeout { .. } => "COMMAND_TIMEOUT",
            FwkitError::ArtifactNotFound { .. } => "ARTIFACT_NOT_FOUND",
            FwkitError::Io(_) => "IO",
            FwkitError::Json(_) => "JSON",
        }
    }

    /// File the error points at, when there is one.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            FwkitError::DirectoryNotFound { path }
            | FwkitError::FileNotFound { path }
            | FwkitError::InvalidWav { path, .. }
            | FwkitError::ArtifactNotFound { path } => Some(path.as_path()),
            FwkitError::MissingConfigKey { file, .. } | FwkitError::InvalidConfig { file, .. } => {
                Some(file.as_path())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_missing_config_key() {
        let err = FwkitError::MissingConfigKey {
            key: "custom_fw_version".to_string(),
            section: "env:seeed_xiao_esp32s3".to_string(),
            file: PathBuf::from("platformio.ini"),
        };
        assert_eq!(
            err.to_string(),
            "custom_fw_version not set in [env:seeed_xiao_esp32s3] of platformio.ini"
        );
    }

    #[test]
    fn test_error_display_unsupported_audio() {
        let err = FwkitError::UnsupportedAudio {
            channels: 2,
            bits_per_sample: 16,
        };
        assert_eq!(
            err.to_string(),
            "WAV must be mono 16-bit PCM (got 2 channel(s), 16-bit)"
        );
    }

    #[test]
    fn test_command_failed_propagates_exit_code() {
        let err = FwkitError::CommandFailed {
            program: "pio".to_string(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "pio failed with exit code 3");
    }

    #[test]
    fn test_signal_terminated_command_exits_one() {
        let err = FwkitError::CommandFailed {
            program: "pio".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "pio failed with exit code none");
    }

    #[test]
    fn test_code_and_file_for_missing_key() {
        let err = FwkitError::MissingConfigKey {
            key: "custom_fw_version".to_string(),
            section: "env:dev".to_string(),
            file: PathBuf::from("platformio.ini"),
        };
        assert_eq!(err.code(), "MISSING_CONFIG_KEY");
        assert_eq!(err.file(), Some(std::path::Path::new("platformio.ini")));

        let timeout = FwkitError::CommandTimeout {
            program: "fwkit embed".to_string(),
            secs: 30,
        };
        assert_eq!(timeout.file(), None);
        assert_eq!(timeout.exit_code(), 1);
    }
}
