//! Helper Utilities

mod text_fit;

pub use text_fit::*;
