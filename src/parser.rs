//! Loading and parsing of connector definition files
//!
//! Definitions are YAML mappings with a required string `version` field.
//! Everything else is carried through untouched into the JSON artifact.

use std::fs;
use std::path::Path;

use crate::error::{ConveyorError, ConveyorResult};
use crate::models::{ConnectorDefinition, RawDefinition};

/// Load a definition file from disk.
///
/// Always returns the `Text` form; parsing happens separately so the
/// builder can write the raw source back out byte for byte.
pub fn load_definition(path: &Path) -> ConveyorResult<RawDefinition> {
    let content = fs::read_to_string(path)?;
    Ok(RawDefinition::Text(content))
}

/// Parse a raw definition into a `ConnectorDefinition`.
///
/// The document must be a mapping and must carry a string `version`.
pub fn parse_definition(file: &Path, raw: &RawDefinition) -> ConveyorResult<ConnectorDefinition> {
    let value: serde_json::Value = match raw {
        RawDefinition::Text(text) => {
            serde_yaml_ng::from_str(text).map_err(|e| ConveyorError::InvalidDefinition {
                file: file.to_path_buf(),
                message: format_yaml_error(&e),
            })?
        }
        RawDefinition::Structured(value) => value.clone(),
    };

    let mut fields = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(ConveyorError::NotAMapping {
                file: file.to_path_buf(),
            })
        }
    };

    let version = match fields.remove("version") {
        Some(serde_json::Value::String(version)) => version,
        Some(_) => {
            return Err(ConveyorError::InvalidVersion {
                file: file.to_path_buf(),
            })
        }
        None => {
            return Err(ConveyorError::MissingVersion {
                file: file.to_path_buf(),
            })
        }
    };

    Ok(ConnectorDefinition { version, fields })
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    match err.location() {
        Some(loc) => format!("line {}, column {}: {}", loc.line(), loc.column(), err),
        None => err.to_string(),
    }
}
