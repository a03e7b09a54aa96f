//! Common test utilities for Conveyor CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp project directory
//! - Fixtures: Reusable definition and template constants

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
