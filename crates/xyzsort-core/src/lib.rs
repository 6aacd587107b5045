//! # xyzsort Core Library
//!
//! Reorders the atoms of a coordinate file so that their sequence matches a
//! template file, pairing atoms of the same species by nearest-neighbor
//! distance.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The atom/atom-set data model, XYZ file I/O
//!   and geometry helpers.
//!
//! - **[`engine`]: The Logic Core.** Greedy nearest-neighbor assignment, its
//!   uniqueness check and the atomic rebuild of the reordered atom sequence.
//!
//! - **[`workflows`]: The Public API.** One-call procedures with diagnostics,
//!   as used by the command-line interface.

pub mod core;
pub mod engine;
pub mod workflows;
