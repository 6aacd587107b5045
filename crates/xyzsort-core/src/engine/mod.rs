//! # Engine Module
//!
//! The reorder engine: greedy nearest-neighbor assignment of source atoms to
//! template positions and the atomic application of that assignment.
//!
//! - **Configuration** ([`config`]) - Tunables for a reorder run
//! - **Reordering** ([`reorder`]) - Computing and applying an [`reorder::Assignment`]
//! - **Error Handling** ([`error`]) - Failures of the matching step
//!
//! The matcher is deliberately greedy. Every template atom picks the closest
//! same-species source atom without regard to earlier picks, and the result is
//! rejected afterwards if any source atom was picked twice. It is intended for
//! small structures whose atoms moved only slightly between the two files.

pub mod config;
pub mod error;
pub mod reorder;
