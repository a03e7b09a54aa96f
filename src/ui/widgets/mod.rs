//! Composable output widgets

pub mod r#box;
pub mod spinner;
