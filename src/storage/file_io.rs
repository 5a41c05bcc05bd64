//! JSON persistence helpers
//!
//! Writes go to a sibling temp file which is fsynced and then renamed over
//! the target, so readers only ever see the old or the new document. The
//! containing directory is fsynced after the rename. Every failure is
//! reported as `BudgetError::Persistence`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn persistence(action: &str, path: &Path, err: impl std::fmt::Display) -> BudgetError {
    BudgetError::Persistence(format!("{} {}: {}", action, path.display(), err))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Flush the directory entry created by a rename
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<(), BudgetError> {
    File::open(dir)
        .and_then(|d| d.sync_all())
        .map_err(|e| persistence("Failed to sync directory", dir, e))
}

// No directory handle to sync on this platform.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<(), BudgetError> {
    Ok(())
}

/// Load a JSON document; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(persistence("Failed to open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| persistence("Failed to parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|e| persistence("Failed to create", dir, e))?;

    let temp = temp_path_for(path);
    let result = (|| {
        let mut writer = BufWriter::new(
            File::create(&temp).map_err(|e| persistence("Failed to create", &temp, e))?,
        );
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| persistence("Failed to serialize", path, e))?;
        writer.flush().map_err(|e| persistence("Failed to write", &temp, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| persistence("Failed to sync", &temp, e))?;
        fs::rename(&temp, path).map_err(|e| persistence("Failed to replace", path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp);
        return result;
    }
    sync_dir(dir)
}
