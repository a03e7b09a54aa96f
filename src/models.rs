//! Core data models for Conveyor
//!
//! Defines the fundamental data structures used throughout Conveyor:
//! - `UnitAddress`: identity of one buildable connector definition
//! - `RawDefinition`: on-disk form of a definition before parsing
//! - `ConnectorDefinition`: a parsed definition with its version
//! - `BuiltUnit`: the artifact pair produced by a successful build

use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::ConveyorResult;

/// Filename suffix that marks a definition as buildable
pub const UNIT_SUFFIX: &str = ".s1.yaml";

/// Identity of one buildable connector definition
///
/// A unit lives exactly one directory below the source root: the
/// directory name is its namespace, the file name its definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitAddress {
    /// Immediate subdirectory of the source root
    pub namespace: String,

    /// File name within the namespace, including extensions
    pub filename: String,
}

impl UnitAddress {
    /// Create a new unit address
    pub fn new(namespace: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            filename: filename.into(),
        }
    }

    /// Parse a source-root-relative path into a unit address.
    ///
    /// Returns `None` unless the path is exactly two plain segments,
    /// both valid UTF-8. Deeper or shallower paths are not units.
    pub fn from_relative(path: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_str()?),
                _ => return None,
            }
        }
        if segments.len() != 2 {
            return None;
        }
        Some(Self::new(segments[0], segments[1]))
    }

    /// Absolute or root-relative path of the source file
    pub fn source_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.namespace).join(&self.filename)
    }

    /// Whether the filename carries the buildable suffix
    pub fn is_buildable(&self) -> bool {
        self.filename.ends_with(UNIT_SUFFIX)
    }

    /// Artifact base name: the filename up to its first dot, then `_v`
    /// and the version with dots mapped to dashes.
    ///
    /// `hr.s1.yaml` at version `1.0.3` becomes `hr_v1-0-3`.
    pub fn base_name(&self, version: &str) -> String {
        let stem = self.filename.split('.').next().unwrap_or_default();
        format!("{}_v{}", stem, version.replace('.', "-"))
    }
}

impl fmt::Display for UnitAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.filename)
    }
}

/// On-disk form of a definition before parsing
///
/// Loads from disk always produce `Text`; `Structured` lets callers
/// hand the builder an already-parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDefinition {
    /// Raw file contents, preserved byte for byte
    Text(String),
    /// An already-parsed JSON value
    Structured(serde_json::Value),
}

impl RawDefinition {
    /// Source text written to the YAML artifact: raw bytes for `Text`,
    /// pretty-printed JSON for `Structured`.
    pub fn source_text(&self) -> ConveyorResult<String> {
        match self {
            RawDefinition::Text(text) => Ok(text.clone()),
            RawDefinition::Structured(value) => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// A parsed connector definition
///
/// `version` drives artifact naming; everything else rides along in
/// `fields` and is serialized after it in stable key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorDefinition {
    /// Declared version, e.g. "1.0.3"
    pub version: String,

    /// All remaining top-level fields of the definition
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ConnectorDefinition {
    /// Render the JSON artifact body: two-space indented, version first
    pub fn to_pretty_json(&self) -> ConveyorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Artifact pair produced by one successful unit build
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltUnit {
    /// The unit that was built
    pub unit: UnitAddress,

    /// Version the definition declared
    pub version: String,

    /// Path of the written JSON artifact
    pub json_path: PathBuf,

    /// Path of the written YAML artifact
    pub yaml_path: PathBuf,
}
