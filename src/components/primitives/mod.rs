//! Primitive Components
//!
//! Basic building blocks like buttons.

pub mod colored_button;
