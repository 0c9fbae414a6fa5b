//! Audio conversion
//!
//! Repackages a mono 16-bit WAV clip as headerless PCM for the doorbell
//! gong. Whole frames are copied verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::{WavClip, WavFormat};
use crate::error::{FwkitError, FwkitResult};
use crate::infrastructure::fs::atomic_write;

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmConversion {
    pub output: PathBuf,
    pub format: WavFormat,
    pub bytes_written: usize,
    /// Set when the clip's sample rate differs from the expected one
    pub rate_mismatch: Option<RateMismatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateMismatch {
    pub expected: u32,
    pub actual: u32,
}

/// Convert `input` to raw PCM at `output`.
///
/// Rejected input leaves `output` untouched.
pub fn convert_wav_to_pcm(input: &Path, output: &Path, expected_rate: u32) -> FwkitResult<PcmConversion> {
    let bytes = fs::read(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FwkitError::FileNotFound {
            path: input.to_path_buf(),
        },
        _ => FwkitError::Io(e),
    })?;

    let clip = WavClip::parse(&bytes).map_err(|reason| FwkitError::InvalidWav {
        path: input.to_path_buf(),
        reason,
    })?;

    if !clip.format.is_mono_16bit() {
        return Err(FwkitError::UnsupportedAudio {
            channels: clip.format.channels,
            bits_per_sample: clip.format.bits_per_sample,
        });
    }

    let rate_mismatch = (clip.format.sample_rate != expected_rate).then_some(RateMismatch {
        expected: expected_rate,
        actual: clip.format.sample_rate,
    });
    if let Some(m) = rate_mismatch {
        log::info!("sample rate {} Hz, expected {} Hz", m.actual, m.expected);
    }

    let pcm = clip.whole_frames();
    if pcm.len() < clip.frames.len() {
        log::debug!("dropping {} trailing byte(s) of a partial frame", clip.frames.len() - pcm.len());
    }
    atomic_write(output, pcm)?;
    log::debug!("{} frames written to {}", clip.frame_count(), output.display());

    Ok(PcmConversion {
        output: output.to_path_buf(),
        format: clip.format,
        bytes_written: pcm.len(),
        rate_mismatch,
    })
}
