//! Smallest rendering units: icons and colored text

pub mod icon;
pub mod text;
