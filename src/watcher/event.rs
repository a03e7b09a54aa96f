//! Watch event types and options

use std::path::PathBuf;

/// Poll interval for the session event loop in milliseconds
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory holding one subdirectory per namespace
    pub source: PathBuf,
    /// Directory receiving built artifacts
    pub output: PathBuf,
    /// Output as NDJSON
    pub json: bool,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
    },
    FileChanged {
        path: String,
    },
    UnitBuilt {
        unit: String,
        artifacts: usize,
    },
    Skipped {
        path: String,
        reason: String,
    },
    BuildFailed {
        unit: String,
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
