use super::atom::Atom;
use nalgebra::Point3;
use std::collections::BTreeMap;
use thiserror::Error;

/// Raised when an atom index does not address an atom of the set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Atom index {index} is out of range for a set of {len} atoms")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// An ordered collection of atoms together with the two free-form header lines
/// of the coordinate file it was read from.
///
/// The order of `atoms` is significant: it is the line order of the file and
/// the subject of reordering. Apart from [`AtomSet::swap`] and the crate-internal
/// wholesale replacement performed by the reorder engine, the shape of a set is
/// fixed once it is constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtomSet {
    header: [String; 2],
    atoms: Vec<Atom>,
}

impl AtomSet {
    pub fn new(header: [String; 2], atoms: Vec<Atom>) -> Self {
        Self { header, atoms }
    }

    pub fn header(&self) -> &[String; 2] {
        &self.header
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.atoms.iter().map(|atom| &atom.position)
    }

    /// Counts the atoms of each species, keyed and ordered by species label.
    pub fn species_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.species.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Exchanges the atoms at positions `i` and `j` (0-based).
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] naming the first offending index if either
    /// index is out of range. The set is left untouched in that case.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), IndexError> {
        let len = self.atoms.len();
        for index in [i, j] {
            if index >= len {
                return Err(IndexError { index, len });
            }
        }
        self.atoms.swap(i, j);
        Ok(())
    }

    /// Replaces the whole atom sequence in a single assignment.
    pub(crate) fn replace_atoms(&mut self, atoms: Vec<Atom>) {
        self.atoms = atoms;
    }
}
