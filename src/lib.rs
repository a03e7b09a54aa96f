//! Conveyor - connector definition build pipeline
//!
//! Conveyor turns versioned YAML connector definitions into deployable
//! artifact pairs: a pretty-printed JSON document plus a verbatim copy of the
//! source definition, named after the connector and its version. It builds a
//! whole source tree in one pass or rebuilds single connectors as files
//! change.

pub mod batch;
pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod locator;
pub mod mcp;
pub mod models;
pub mod parser;
pub mod ui;
pub mod watcher;

// Re-exports for convenience
pub use batch::{run_all, BuildReport};
pub use builder::build_unit;
pub use config::Config;
pub use error::{BuildError, ConveyorError, ConveyorResult};
pub use locator::discover_units;
pub use models::{BuiltUnit, ConnectorDefinition, RawDefinition, UnitAddress, UNIT_SUFFIX};
pub use parser::{load_definition, parse_definition};
pub use watcher::{WatchEvent, WatchOptions, WatchSession};
