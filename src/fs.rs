//! Filesystem helpers shared by the build and generator paths

use std::fs;
use std::path::Path;

use crate::error::ConveyorResult;

/// Write a file, creating missing parent directories first.
///
/// Writes are whole-file and non-transactional: a failure can leave
/// sibling artifacts from the same build already on disk.
pub fn write_file(path: &Path, content: &str) -> ConveyorResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
