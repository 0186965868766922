//! JSON files for saved oracle and tuner state.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Current schema version of saved files.
pub(crate) const SCHEMA_VERSION: u32 = 1;

fn storage_error(e: impl ToString) -> Error {
    Error::Storage(e.to_string())
}

/// Writes `value` as pretty JSON to `path`.
///
/// Writes to a temp file in the same directory, then renames, so a crash
/// mid-write never leaves a truncated file behind.
pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));
    let file = std::fs::File::create(&tmp_path).map_err(storage_error)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(storage_error)?;
    writer.flush().map_err(storage_error)?;
    std::fs::rename(&tmp_path, path).map_err(storage_error)
}

/// Reads a JSON value from `path`, rejecting unknown schema versions.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
    version_of: impl FnOnce(&T) -> u32,
) -> Result<T> {
    let file = std::fs::File::open(path).map_err(storage_error)?;
    let value: T =
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(storage_error)?;
    let version = version_of(&value);
    if version != SCHEMA_VERSION {
        return Err(Error::Storage(format!(
            "unsupported schema version {version}, expected {SCHEMA_VERSION}"
        )));
    }
    Ok(value)
}
