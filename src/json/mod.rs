use std::fs;
use std::path::Path;

use crate::domain::revenue::Revenue;
use crate::error::Result;

/// Parse [`Revenue`] records from a JSON file.
///
/// The file must hold a single JSON array of revenue objects; a missing file
/// or malformed content is a fatal error.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Revenue>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write revenues as a pretty-printed (2-space indented) JSON array.
pub fn write(path: impl AsRef<Path>, revenues: &[Revenue]) -> Result<()> {
    let content = serde_json::to_string_pretty(revenues)?;
    fs::write(path, content)?;
    Ok(())
}

/// Move the file at `path` aside to `<path>.bak`, replacing any previous
/// backup, then write revenues to the original path.
///
/// The rename and the rewrite are two separate steps with no rollback: a
/// failure in between leaves only the backup behind.
pub fn write_with_backup(path: impl AsRef<Path>, revenues: &[Revenue]) -> Result<()> {
    let path = path.as_ref();
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    fs::rename(path, &backup)?;
    write(path, revenues)
}
