//! Error types for Conveyor
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`
//! at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::UnitAddress;

/// Result type alias for Conveyor operations
pub type ConveyorResult<T> = Result<T, ConveyorError>;

/// Main error type for Conveyor operations
#[derive(Error, Debug)]
pub enum ConveyorError {
    /// Source directory missing at startup
    #[error("source directory not found: {path}")]
    SourceRootNotFound { path: PathBuf },

    /// Definition file is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// Definition parsed to a scalar or sequence instead of a mapping
    #[error("connector definition in {file} is not a mapping")]
    NotAMapping { file: PathBuf },

    /// Missing required `version` field
    #[error("missing required field 'version' in {file}")]
    MissingVersion { file: PathBuf },

    /// `version` present but not a string scalar
    #[error("field 'version' in {file} must be a string - quote numeric versions")]
    InvalidVersion { file: PathBuf },

    /// MCP template file missing
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// MCP template is not valid JSON after substitution
    #[error("invalid JSON in {file}: {message}")]
    InvalidTemplate { file: PathBuf, message: String },

    /// Config file rejected by the TOML parser
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A failed build attempt for one unit.
///
/// Carries the unit identity alongside the cause so batch and watch
/// reporting can name the offender without recomputing paths.
#[derive(Error, Debug)]
#[error("{unit}: {cause}")]
pub struct BuildError {
    pub unit: UnitAddress,
    #[source]
    pub cause: ConveyorError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_source_root_not_found() {
        let err = ConveyorError::SourceRootNotFound {
            path: PathBuf::from("configs"),
        };
        assert_eq!(err.to_string(), "source directory not found: configs");
    }

    #[test]
    fn test_error_display_missing_version() {
        let err = ConveyorError::MissingVersion {
            file: PathBuf::from("configs/acme/hr.s1.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "missing required field 'version' in configs/acme/hr.s1.yaml"
        );
    }

    #[test]
    fn test_error_display_not_a_mapping() {
        let err = ConveyorError::NotAMapping {
            file: PathBuf::from("configs/acme/list.s1.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "connector definition in configs/acme/list.s1.yaml is not a mapping"
        );
    }

    #[test]
    fn test_build_error_names_unit() {
        let err = BuildError {
            unit: UnitAddress::new("acme", "hr.s1.yaml"),
            cause: ConveyorError::MissingVersion {
                file: PathBuf::from("configs/acme/hr.s1.yaml"),
            },
        };
        assert_eq!(
            err.to_string(),
            "acme/hr.s1.yaml: missing required field 'version' in configs/acme/hr.s1.yaml"
        );
    }
}
