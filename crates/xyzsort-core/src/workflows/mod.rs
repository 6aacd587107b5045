//! # Workflows Module
//!
//! High-level entry points that tie the [`engine`](crate::engine) and
//! [`core`](crate::core) layers together into complete procedures.
//!
//! - **Reorder Workflow** ([`reorder`]) - Reorder a source atom set after a
//!   template and report how well the two structures matched.

pub mod reorder;
