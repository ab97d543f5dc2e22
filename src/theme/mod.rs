//! Theme - Colors, Typography and Style Presets

pub mod colors;
pub mod preset;
pub mod registry;
pub mod typography;
