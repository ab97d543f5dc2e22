//! Composite Components
//!
//! Containers composed from primitives and caller content.

pub mod card;
