use crate::errors::FormatError;
use crate::sections::{Marker, SectionIndex, STRUCTURE};
use log::debug;
use regex::Regex;

/// An atom record of the STRUC block:
/// index, element, site label, occupancy, x, y, z, Wyckoff symbol, multiplicity
const ATOM_RECORD: &str = r"(?m)^[ \t]*\d+[ \t]+\S+[ \t]+\S+[ \t]+\d+\.\d+[ \t]+(\S+)[ \t]+(\S+)[ \t]+(\S+)[ \t]+\S+[ \t]+\d+";

/// struct for containing the information about one snapshot of the structure
///
/// > positions: Vec<[f64; 3]> - the positions of the atoms in fractional coordinates
/// > lattice_lengths: [f64; 3] - the length of each lattice vector, angles are not kept
/// > text: String - text representation from the input file
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    pub positions: Vec<[f64; 3]>,
    pub lattice_lengths: [f64; 3],
    pub text: String,
}

impl Structure {
    /// Reads the atom positions and lattice lengths out of a VESTA file.
    pub fn parse(text: String) -> Result<Self, FormatError> {
        let (positions, lattice_lengths) = {
            let index = SectionIndex::new(&text);
            (positions(&index)?, lattice_lengths(&index)?)
        };
        debug!("Parsed {} atoms in a {:?} cell.",
               positions.len(),
               lattice_lengths);
        Ok(Self { positions,
                  lattice_lengths,
                  text })
    }
}

/// Fractional coordinates of every atom record between STRUC and THERI.
fn positions(index: &SectionIndex) -> Result<Vec<[f64; 3]>, FormatError> {
    let block = index.slice(STRUCTURE)?;
    let re = Regex::new(ATOM_RECORD).expect("atom record pattern is valid");
    let positions = re.captures_iter(block)
                      .map(|caps| -> Result<[f64; 3], FormatError> {
                          let mut p = [0f64; 3];
                          for (i, x) in p.iter_mut().enumerate() {
                              *x = parse_float(STRUCTURE.name, &caps[i + 1])?;
                          }
                          Ok(p)
                      })
                      .collect::<Result<Vec<[f64; 3]>, FormatError>>()?;
    if positions.is_empty() {
        return Err(FormatError::NoAtoms);
    }
    Ok(positions)
}

/// The first three values of the line after CELLP, the angles that follow are ignored.
fn lattice_lengths(index: &SectionIndex) -> Result<[f64; 3], FormatError> {
    let line = index.line_after(Marker::Cellp)?;
    let values = line.split_whitespace()
                     .take(3)
                     .map(|x| parse_float("lattice", x))
                     .collect::<Result<Vec<f64>, FormatError>>()?;
    if values.len() != 3 || values.iter().any(|l| !(l.is_finite() && *l > 0.)) {
        return Err(FormatError::Lattice);
    }
    Ok([values[0], values[1], values[2]])
}

fn parse_float(section: &'static str, value: &str) -> Result<f64, FormatError> {
    value.parse::<f64>()
         .map_err(|_| FormatError::Unparsable(section, value.to_string()))
}
