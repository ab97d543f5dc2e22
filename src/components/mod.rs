//! Components - Reusable UI Components
//!
//! Pure UI components that hold no state and do no I/O.

pub mod accessibility;
pub mod composite;
pub mod primitives;
