//! Unit builder: load, parse, and write one connector's artifact pair
//!
//! A successful build writes two files under `output_root/{namespace}/`:
//! a pretty-printed JSON rendering of the parsed definition and a copy
//! of the YAML source, both named `{stem}_v{mangled-version}`.

use std::path::Path;

use crate::error::{BuildError, ConveyorResult};
use crate::fs::write_file;
use crate::models::{BuiltUnit, UnitAddress, UNIT_SUFFIX};
use crate::parser;

/// Build one unit end to end.
///
/// Returns `Ok(None)` when the filename does not carry the buildable
/// suffix, so callers can hand the builder any directory entry without
/// pre-filtering. Failures carry the unit identity for reporting.
pub fn build_unit(
    source_root: &Path,
    output_root: &Path,
    unit: &UnitAddress,
) -> Result<Option<BuiltUnit>, BuildError> {
    try_build(source_root, output_root, unit).map_err(|cause| BuildError {
        unit: unit.clone(),
        cause,
    })
}

fn try_build(
    source_root: &Path,
    output_root: &Path,
    unit: &UnitAddress,
) -> ConveyorResult<Option<BuiltUnit>> {
    if !unit.is_buildable() {
        return Ok(None);
    }

    let source_path = unit.source_path(source_root);
    let raw = parser::load_definition(&source_path)?;
    let definition = parser::parse_definition(&source_path, &raw)?;

    let base = unit.base_name(&definition.version);
    let output_dir = output_root.join(&unit.namespace);
    let json_path = output_dir.join(format!("{}.json", base));
    let yaml_path = output_dir.join(format!("{}{}", base, UNIT_SUFFIX));

    // JSON first, then the source copy. The pair is not transactional:
    // a failed second write leaves the first artifact in place.
    write_file(&json_path, &definition.to_pretty_json()?)?;
    write_file(&yaml_path, &raw.source_text()?)?;

    Ok(Some(BuiltUnit {
        unit: unit.clone(),
        version: definition.version,
        json_path,
        yaml_path,
    }))
}
