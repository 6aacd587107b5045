use nalgebra::Point3;

/// Represents a single atom record of a coordinate file.
///
/// An atom is a labeled point in Cartesian space. The label (`species`) is an
/// opaque, case-sensitive identifier such as an element symbol or a force field
/// atom type; two atoms are considered the same kind only when their labels are
/// byte-for-byte equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The species label of the atom (e.g., "C", "H", "Cl", "O2").
    pub species: String,
    /// The 3D coordinates of the atom.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from a species label and a position.
    ///
    /// # Arguments
    ///
    /// * `species` - The species label of the atom.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(species: &str, position: Point3<f64>) -> Self {
        Self {
            species: species.to_string(),
            position,
        }
    }

    /// Returns `true` if `other` carries exactly the same species label.
    pub fn is_same_species(&self, other: &Atom) -> bool {
        self.species == other.species
    }

    /// Euclidean distance between this atom and `other`.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
