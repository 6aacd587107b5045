//! # Core Models Module
//!
//! Data structures describing the contents of a coordinate file.
//!
//! - [`atom`] - A single labeled point in 3D space.
//! - [`atom_set`] - An ordered collection of atoms plus the two header lines of
//!   the file it came from. This is the unit that is read, reordered and written.
//!
//! ```ignore
//! use xyzsort::core::models::{atom::Atom, atom_set::AtomSet};
//! use nalgebra::Point3;
//!
//! let mut set = AtomSet::new(
//!     ["2".to_string(), "hydrogen".to_string()],
//!     vec![
//!         Atom::new("H", Point3::new(0.0, 0.0, 0.0)),
//!         Atom::new("H", Point3::new(0.74, 0.0, 0.0)),
//!     ],
//! );
//! set.swap(0, 1)?;
//! ```

pub mod atom;
pub mod atom_set;
