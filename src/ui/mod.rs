//! Terminal output layer
//!
//! Rendering is pure: every widget takes its capability flags as
//! arguments and returns a `String`, so the same code paths serve
//! rich terminals, dumb pipes, and tests. Only `LiveRegion` moves
//! the cursor.

pub mod blocks;
pub mod context;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
