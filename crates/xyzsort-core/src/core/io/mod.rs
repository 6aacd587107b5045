//! Provides input/output functionality for coordinate file formats.
//!
//! This module contains a trait-based interface for reading and writing
//! [`AtomSet`](crate::core::models::atom_set::AtomSet)s and its implementation for
//! the plain XYZ layout (two header lines followed by one atom per line).

pub mod traits;
pub mod xyz;
