//! Local file system writes

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::value_objects::ContentHash;
use crate::error::FwkitResult;

/// Outcome of a change-aware write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// Write content atomically: temp file in the same directory, then rename.
///
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> FwkitResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write only when the on-disk bytes differ.
///
/// Keeps modification times stable so the firmware build does not recompile
/// translation units that include an unchanged header.
pub fn write_if_changed(path: &Path, content: &[u8]) -> FwkitResult<WriteStatus> {
    if let Ok(existing) = fs::read(path) {
        if existing == content {
            return Ok(WriteStatus::Unchanged);
        }
    }
    atomic_write(path, content)?;
    Ok(WriteStatus::Written)
}

/// Copy a file atomically, returning the copied size and digest.
pub fn copy_atomic(src: &Path, dest: &Path) -> FwkitResult<(u64, ContentHash)> {
    let bytes = fs::read(src)?;
    atomic_write(dest, &bytes)?;
    Ok((bytes.len() as u64, ContentHash::from_bytes(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.h");

        atomic_write(&path, b"#pragma once\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dist").join("ota").join("fw.bin");

        atomic_write(&path, &[0xE9, 0x00]).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0xE9, 0x00]);
    }

    #[test]
    fn atomic_write_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn write_if_changed_reports_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.h");

        assert_eq!(write_if_changed(&path, b"x").unwrap(), WriteStatus::Written);
        assert_eq!(write_if_changed(&path, b"x").unwrap(), WriteStatus::Unchanged);
        assert_eq!(write_if_changed(&path, b"y").unwrap(), WriteStatus::Written);
        assert_eq!(fs::read(&path).unwrap(), b"y");
    }

    #[test]
    fn copy_atomic_returns_size_and_hash() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("firmware.bin");
        let dest = dir.path().join("out").join("fw-1.0-firmware.bin");
        fs::write(&src, b"image").unwrap();

        let (size, hash) = copy_atomic(&src, &dest).unwrap();

        assert_eq!(size, 5);
        assert_eq!(hash, ContentHash::from_bytes(b"image"));
        assert_eq!(fs::read(&dest).unwrap(), b"image");
    }
}
