// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::data::Restaurant;
use crate::error::{Error, Result};

/// Write the directory as a pretty-printed UTF-8 JSON array.
///
/// The snapshot goes to a sibling temp file first and is renamed over `path`
/// only once fully written, so a failed write leaves any previous file intact.
/// Returns the final path written to.
pub fn write_snapshot(path: &Path, restaurants: &[Restaurant]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    {
        let file = File::create(&tmp).map_err(|e| Error::io(&tmp, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, restaurants)?;
        out.write_all(b"\n").map_err(|e| Error::io(&tmp, e))?;
        out.flush().map_err(|e| Error::io(&tmp, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::io(path, e)
    })?;

    info!(path = %path.display(), restaurants = restaurants.len(), "snapshot written");
    Ok(path.to_path_buf())
}

pub fn read_snapshot(path: &Path) -> Result<Vec<Restaurant>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?; }
    Ok(())
}

/// "out/dir.json" → "out/.dir.json.tmp"
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("snapshot"));
    path.with_file_name(format!(".{name}.tmp"))
}
