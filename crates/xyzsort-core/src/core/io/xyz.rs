use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::atom_set::AtomSet;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const HEADER_LINES: usize = 2;
const MIN_ATOM_FIELDS: usize = 4;
const SPECIES_WIDTH: usize = 4;
const COORD_WIDTH: usize = 15;
const COORD_PRECISION: usize = 10;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
}

#[derive(Debug, Error, PartialEq)]
pub enum XyzParseErrorKind {
    #[error("File ends before the two header lines are complete")]
    MissingHeader,
    #[error("Blank lines are not allowed in the atom block")]
    BlankLine,
    #[error("Atom record needs at least 4 fields (species x y z), found {found}")]
    TooFewFields { found: usize },
    #[error("Invalid float for coordinate {column} (value: '{value}')")]
    InvalidFloat { column: &'static str, value: String },
}

fn parse_coordinate(value: &str, column: &'static str, line: usize) -> Result<f64, XyzError> {
    let invalid = || XyzError::Parse {
        line,
        kind: XyzParseErrorKind::InvalidFloat {
            column,
            value: value.to_string(),
        },
    };
    // NaN and infinities parse as f64 but are not coordinates.
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(invalid()),
    }
}

/// Formats a coordinate with a leading blank in place of a `+` sign, right
/// justified to the fixed column width.
fn format_coordinate(value: f64) -> String {
    let digits = if value.is_sign_negative() {
        format!("{:.*}", COORD_PRECISION, value)
    } else {
        format!(" {:.*}", COORD_PRECISION, value)
    };
    format!("{:>width$}", digits, width = COORD_WIDTH)
}

/// Plain XYZ coordinate files.
///
/// The first two lines are opaque header text. Every following line holds one
/// atom as whitespace separated `species x y z` fields; anything after the
/// fourth field is ignored on input and dropped on output.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<AtomSet, Self::Error> {
        let mut header: [String; HEADER_LINES] = Default::default();
        let mut atoms = Vec::new();

        let mut lines = reader.lines();
        for (idx, slot) in header.iter_mut().enumerate() {
            let line = lines.next().ok_or(XyzError::Parse {
                line: idx + 1,
                kind: XyzParseErrorKind::MissingHeader,
            })??;
            *slot = line.trim_end().to_string();
        }

        for (offset, line_res) in lines.enumerate() {
            let line = line_res?;
            let line_num = HEADER_LINES + offset + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.len() {
                0 => {
                    return Err(XyzError::Parse {
                        line: line_num,
                        kind: XyzParseErrorKind::BlankLine,
                    });
                }
                n if n < MIN_ATOM_FIELDS => {
                    return Err(XyzError::Parse {
                        line: line_num,
                        kind: XyzParseErrorKind::TooFewFields { found: n },
                    });
                }
                _ => {}
            }

            let x = parse_coordinate(fields[1], "x", line_num)?;
            let y = parse_coordinate(fields[2], "y", line_num)?;
            let z = parse_coordinate(fields[3], "z", line_num)?;
            atoms.push(Atom::new(fields[0], Point3::new(x, y, z)));
        }

        Ok(AtomSet::new(header, atoms))
    }

    fn write_to(set: &AtomSet, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in set.header() {
            writeln!(writer, "{}", line)?;
        }
        for atom in set.atoms() {
            writeln!(
                writer,
                "{:<width$} {} {} {}",
                atom.species,
                format_coordinate(atom.position.x),
                format_coordinate(atom.position.y),
                format_coordinate(atom.position.z),
                width = SPECIES_WIDTH,
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
