//! Deterministic gzip used for embedded assets.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Compress data using gzip
///
/// The header carries no file name and a zero mtime, so identical input
/// always yields identical output.
pub fn gzip_compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_gzip_compress() {
        let data = b"Hello, World! This is a test of gzip compression. Hello, World!";
        let compressed = gzip_compress(data).unwrap();

        // gzip magic number
        assert_eq!(&compressed[0..2], &[0x1f, 0x8b]);

        let mut decoded = Vec::new();
        GzDecoder::new(&compressed[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_gzip_is_deterministic() {
        let data = b"<!doctype html><title>doorbell</title>";
        assert_eq!(gzip_compress(data).unwrap(), gzip_compress(data).unwrap());
    }

    #[test]
    fn test_gzip_header_has_zero_mtime() {
        let compressed = gzip_compress(b"x").unwrap();
        assert_eq!(&compressed[4..8], &[0, 0, 0, 0]);
    }
}
