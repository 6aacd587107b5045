//! # Core Module
//!
//! Stateless building blocks shared by the reorder engine and its callers.
//!
//! - **Data Model** ([`models`]) - Atoms and atom sets as read from coordinate files
//! - **File I/O** ([`io`]) - Reading and writing the XYZ coordinate layout
//! - **Geometry** ([`utils`]) - Distance helpers used for nearest-neighbor matching

pub mod io;
pub mod models;
pub mod utils;
