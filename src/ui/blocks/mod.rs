//! Mid-level blocks composed from widgets and primitives

pub mod header;
pub mod summary;
