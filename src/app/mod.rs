//! Application Layer
//!
//! The gallery binary: app initialization, window management and the preview view.

pub mod application;
pub mod gallery;
