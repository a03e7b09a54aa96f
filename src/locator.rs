//! Unit discovery: enumerate buildable definitions under a source root
//!
//! The layout is fixed at exactly one level of nesting. Immediate
//! subdirectories of the source root are namespaces; files inside them
//! with the buildable suffix are units. Anything deeper is ignored.

use std::fs;
use std::path::Path;

use crate::error::{ConveyorError, ConveyorResult};
use crate::models::{UnitAddress, UNIT_SUFFIX};

/// Enumerate every buildable unit under the source root.
///
/// Loose files at the root and nested directories inside namespaces are
/// skipped. Results are sorted by namespace then filename so batch
/// output is deterministic across platforms.
pub fn discover_units(source_root: &Path) -> ConveyorResult<Vec<UnitAddress>> {
    if !source_root.is_dir() {
        return Err(ConveyorError::SourceRootNotFound {
            path: source_root.to_path_buf(),
        });
    }

    let mut units = Vec::new();
    for entry in fs::read_dir(source_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let namespace = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => continue,
        };

        for file in fs::read_dir(entry.path())? {
            let file = file?;
            if !file.path().is_file() {
                continue;
            }
            if let Some(name) = file.file_name().to_str() {
                if name.ends_with(UNIT_SUFFIX) {
                    units.push(UnitAddress::new(namespace.clone(), name));
                }
            }
        }
    }

    units.sort_by(|a, b| (&a.namespace, &a.filename).cmp(&(&b.namespace, &b.filename)));
    Ok(units)
}
