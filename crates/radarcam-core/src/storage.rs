//! Disk I/O for the cached frame.
//!
//! Each write goes to its own uniquely named `.part` sibling, is synced, then
//! renamed over the final path. Overlapping writers never share a temp file,
//! and a reader sees either the previous frame or one whole new frame.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

/// Suffix of in-flight temp files next to the final path.
pub const TEMP_SUFFIX: &str = ".part";

/// Replace `final_path` with `data` via write-to-temp, fsync, rename.
/// The temp file lives in the same directory so the rename stays on one filesystem.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<()> {
    let dir = match final_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let mut prefix: OsString = final_path
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| OsString::from("frame"));
    prefix.push(".");

    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(data).context("storage write failed")?;
    tmp.as_file().sync_all().context("storage sync failed")?;

    tmp.persist(final_path).map_err(|e| e.error).with_context(|| {
        format!("failed to rename temp file to {}", final_path.display())
    })?;
    Ok(())
}

/// Read the whole file; a missing file is `Ok(None)`.
pub fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}
