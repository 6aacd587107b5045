use crate::core::models::atom_set::AtomSet;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Defines the interface for reading and writing coordinate file formats.
///
/// Implementors handle format-specific parsing and serialization of an
/// [`AtomSet`]; the path-based helpers take care of opening and closing files.
pub trait MolecularFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads an atom set from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<AtomSet, Self::Error>;

    /// Writes an atom set to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(set: &AtomSet, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads an atom set from a file path.
    ///
    /// The file handle is released as soon as parsing finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<AtomSet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes an atom set to a file path.
    ///
    /// The complete file contents are rendered in memory before the destination
    /// is touched, so a formatting failure never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    fn write_to_path<P: AsRef<Path>>(set: &AtomSet, path: P) -> Result<(), Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(set, &mut buffer)?;
        fs::write(path, buffer)?;
        Ok(())
    }
}
