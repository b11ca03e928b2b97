//! Dataset file I/O.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use vle_data::Dataset;

use crate::{StoreError, StoreResult};

/// Pretty JSON (2-space indent) exactly as written to disk.
pub fn to_json(dataset: &Dataset) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Sibling scratch file `<name>.<pid>.tmp`; the pid keeps concurrent
/// writers aimed at the same target from sharing one scratch file.
fn temp_path(path: &Path) -> StoreResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| StoreError::InvalidPath {
        message: format!("{} has no file name", path.display()),
    })?;
    let mut tmp = name.to_os_string();
    tmp.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp))
}

/// Write `dataset` to `path`, replacing any existing file.
///
/// The JSON is encoded in memory first and moved into place with a rename,
/// so a failed run never leaves a partial file at `path`.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> StoreResult<()> {
    let json = to_json(dataset)?;
    let tmp = temp_path(path)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(err) = result {
        warn!(path = %path.display(), error = %err, "dataset write failed");
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }

    info!(
        path = %path.display(),
        points = dataset.len(),
        bytes = json.len(),
        "wrote dataset"
    );
    Ok(())
}

pub fn load_dataset(path: &Path) -> StoreResult<Dataset> {
    if !path.exists() {
        return Err(StoreError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    debug!(path = %path.display(), points = dataset.len(), "loaded dataset");
    Ok(dataset)
}
