//! Minimal RIFF/WAVE reader.
//!
//! Extracts the `fmt ` description and the raw `data` chunk bytes. Only
//! integer PCM (format tag 1, or 0xFFFE extensible) is accepted; anything
//! else is reported as a malformed input.

const FORMAT_PCM: u16 = 0x0001;
const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Sample layout described by the `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl WavFormat {
    pub fn is_mono_16bit(&self) -> bool {
        self.channels == 1 && self.bits_per_sample == 16
    }

    /// Bytes per frame: one sample per channel, each rounded up to whole bytes
    pub fn frame_size(&self) -> usize {
        self.channels as usize * (self.bits_per_sample as usize).div_ceil(8)
    }
}

/// Parsed WAV: format plus raw frame bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavClip<'a> {
    pub format: WavFormat,
    pub frames: &'a [u8],
}

impl<'a> WavClip<'a> {
    /// Parse a complete WAV file held in memory.
    ///
    /// Chunks are word aligned; a truncated `data` chunk yields the bytes
    /// actually present.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, String> {
        if bytes.len() < 12 {
            return Err("file too short for a RIFF header".to_string());
        }
        if &bytes[0..4] != b"RIFF" {
            return Err("missing RIFF signature".to_string());
        }
        if &bytes[8..12] != b"WAVE" {
            return Err("RIFF form type is not WAVE".to_string());
        }

        let mut format: Option<WavFormat> = None;
        let mut offset = 12usize;

        while offset + 8 <= bytes.len() {
            let id = &bytes[offset..offset + 4];
            let size = read_u32(bytes, offset + 4) as usize;
            let body_start = offset + 8;
            let body_end = body_start.saturating_add(size).min(bytes.len());
            let body = &bytes[body_start..body_end];

            match id {
                b"fmt " => format = Some(parse_fmt(body)?),
                b"data" => {
                    let format = format.ok_or_else(|| "data chunk before fmt chunk".to_string())?;
                    return Ok(Self {
                        format,
                        frames: body,
                    });
                }
                _ => {}
            }

            // Odd-sized chunks carry one pad byte.
            offset = body_start.saturating_add(size).saturating_add(size & 1);
        }

        match format {
            Some(_) => Err("no data chunk".to_string()),
            None => Err("no fmt chunk".to_string()),
        }
    }

    /// Number of complete frames in the data chunk
    pub fn frame_count(&self) -> usize {
        match self.format.frame_size() {
            0 => 0,
            size => self.frames.len() / size,
        }
    }

    /// Data chunk bytes without a trailing partial frame
    pub fn whole_frames(&self) -> &'a [u8] {
        &self.frames[..self.frame_count() * self.format.frame_size()]
    }
}

fn parse_fmt(body: &[u8]) -> Result<WavFormat, String> {
    if body.len() < 16 {
        return Err(format!("fmt chunk too short ({} bytes)", body.len()));
    }

    let format_tag = read_u16(body, 0);
    if format_tag != FORMAT_PCM && format_tag != FORMAT_EXTENSIBLE {
        return Err(format!("unsupported format tag 0x{:04x}", format_tag));
    }

    let format = WavFormat {
        format_tag,
        channels: read_u16(body, 2),
        sample_rate: read_u32(body, 4),
        block_align: read_u16(body, 12),
        bits_per_sample: read_u16(body, 14),
    };

    if format.channels == 0 {
        return Err("fmt chunk declares zero channels".to_string());
    }

    Ok(format)
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Build a canonical 44-byte-header PCM WAV. Used by tests.
#[doc(hidden)]
pub fn encode_pcm_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, frames: &[u8]) -> Vec<u8> {
    let block_align = channels * (bits_per_sample / 8).max(1);
    let byte_rate = sample_rate * block_align as u32;
    let mut out = Vec::with_capacity(44 + frames.len() + 1);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + frames.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(frames.len() as u32).to_le_bytes());
    out.extend_from_slice(frames);
    if frames.len() % 2 == 1 {
        out.push(0);
    }
    out
}
