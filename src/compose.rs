use crate::config::RenderConfig;
use crate::displacement::Displacement;
use crate::errors::{ConfigError, Error, FormatError};
use crate::sections::{Marker, Section, SectionIndex, ATOM_TYPES, BOND_PAIRS,
                      BOUNDARY, SEARCH_BONDS, SITE_TYPES, VECTOR_SCALE};
use crate::structure::Structure;
use crate::utils;
use log::{debug, info};
use regex::{Captures, Regex};
use std::ops::Range;

/// A section whose records carry a radius, and the pattern that captures
/// everything in a record up to that radius.
struct RadiusRecord {
    section: Section,
    pattern: &'static str,
}

/// index, label, radius
const TYPE_RECORD: &str = r"(?m)^([ \t]*\d+[ \t]+\S+[ \t]+)\d+\.\d+";

const RADIUS_RECORDS: [RadiusRecord; 4] = [
    RadiusRecord { section: ATOM_TYPES,
                   pattern: TYPE_RECORD },
    RadiusRecord { section: SITE_TYPES,
                   pattern: TYPE_RECORD },
    // index, style, radius
    RadiusRecord { section: BOND_PAIRS,
                   pattern: r"(?m)^([ \t]*\d+[ \t]+\d+[ \t]+)\d+\.\d+" },
    // index, species A, species B, min, max, five flags, radius
    RadiusRecord { section: SEARCH_BONDS,
                   pattern:
                       r"(?m)^([ \t]*\d+[ \t]+\S+[ \t]+\S+[ \t]+\d+\.\d+[ \t]+\d+\.\d+(?:[ \t]+\d+){5}[ \t]+)\d+\.\d+" },
];

/// A replacement of part of the template.
struct Edit {
    name: &'static str,
    range: Range<usize>,
    text: String,
}

/// Builds the VECTR and VECTT records for every displacement over the cutoff.
///
/// Both blocks come from the same pass so the n-th vector type always has the
/// n-th style.
pub fn vector_blocks(displacements: &[Displacement],
                     config: &RenderConfig)
                     -> (String, String) {
    let mut geometry = String::new();
    let mut style = String::new();
    let [r, g, b] = config.colour;
    for (i, d) in displacements.iter()
                               .filter(|d| d.magnitude() > config.cutoff)
                               .enumerate()
    {
        let n = i + 1;
        let [x, y, z] = d.vector;
        geometry.push_str(&format!(" {} {:.6} {:.6} {:.6} 0\n {} 0 0 0 0\n 0 0 0 0 0\n",
                                   n, x, y, z, d.site));
        style.push_str(&format!(" {} {:.6} {} {} {} 0\n",
                                n, config.radius, r, g, b));
    }
    (geometry, style)
}

/// Sets the radius of every record in a section to `radius`.
pub fn shrink_radii(section: &str, pattern: &str, radius: f64) -> String {
    let re = Regex::new(pattern).expect("radius record pattern is valid");
    re.replace_all(section, |caps: &Captures| format!("{}{}", &caps[1], radius))
      .into_owned()
}

/// The boundary block for a unit cell centred on `centre`.
pub fn boundary_block(centre: [f64; 3]) -> String {
    let min = utils::shift(centre, -0.5);
    let max = utils::shift(centre, 0.5);
    format!("BOUND\n {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}\n 0 0 0 0 0\n",
            min[0], max[0], min[1], max[1], min[2], max[2])
}

/// Writes the vectors into the final template.
///
/// The radii are taken from the initial structure's text and shrunk, the
/// vector scale is replaced and, with a centre atom, so is the boundary.
/// Nothing else in the final template changes. Any missing header in either
/// text aborts the whole composition.
pub fn compose(final_text: &str,
               initial: &Structure,
               displacements: &[Displacement],
               config: &RenderConfig)
               -> Result<String, Error> {
    let template = SectionIndex::new(final_text);
    let source = SectionIndex::new(&initial.text);
    let (geometry, style) = vector_blocks(displacements, config);
    let vectr = template.header(Marker::Vectr)?.body;
    let vectt = template.header(Marker::Vectt)?.body;
    let mut edits = vec![Edit { name: "vector geometry",
                                range: vectr..vectr,
                                text: geometry },
                         Edit { name: "vector style",
                                range: vectt..vectt,
                                text: style },];
    for record in RADIUS_RECORDS.iter() {
        let text = shrink_radii(source.slice(record.section)?,
                                record.pattern,
                                config.shrink_radius);
        edits.push(Edit { name: record.section.name,
                          range: template.range(record.section)?,
                          text });
    }
    edits.push(Edit { name: VECTOR_SCALE.name,
                      range: template.range(VECTOR_SCALE)?,
                      text: format!("VECTS {}\n", config.scale_factor) });
    if let Some(atom) = config.centre_atom {
        let atoms = initial.positions.len();
        if atom == 0 || atom > atoms {
            return Err(ConfigError::OutOfRange("centre-atom", atom, atoms).into());
        }
        edits.push(Edit { name: BOUNDARY.name,
                          range: template.range(BOUNDARY)?,
                          text: boundary_block(initial.positions[atom - 1]) });
    }
    info!("Drawing {} of {} vectors.",
          displacements.iter()
                       .filter(|d| d.magnitude() > config.cutoff)
                       .count(),
          displacements.len());
    Ok(splice(final_text, edits)?)
}

/// Applies non-overlapping edits to the text in a single pass.
fn splice(text: &str, mut edits: Vec<Edit>) -> Result<String, FormatError> {
    edits.sort_by_key(|e| (e.range.start, e.range.end));
    let extra = edits.iter().map(|e| e.text.len()).sum::<usize>();
    let mut out = String::with_capacity(text.len() + extra);
    let mut pos = 0;
    let mut last = "";
    for edit in edits {
        if edit.range.start < pos {
            return Err(FormatError::Overlap(last, edit.name));
        }
        debug!("Writing {} section at {:?}.", edit.name, edit.range);
        out.push_str(&text[pos..edit.range.start]);
        out.push_str(&edit.text);
        pos = edit.range.end;
        last = edit.name;
    }
    out.push_str(&text[pos..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displacement(site: usize, vector: [f64; 3]) -> Displacement {
        Displacement { site, vector }
    }

    #[test]
    fn vector_blocks_cutoff_strict() {
        let d = vec![displacement(1, [0.1, 0., 0.]),
                     displacement(2, [0., -0.5, 0.])];
        let config = RenderConfig { cutoff: 0.5,
                                    ..RenderConfig::default() };
        let (geometry, style) = vector_blocks(&d, &config);
        assert_eq!(geometry, "");
        assert_eq!(style, "");
    }

    #[test]
    fn vector_blocks_over_cutoff() {
        let d = vec![displacement(1, [0., 0.5 + 1e-9, 0.])];
        let config = RenderConfig { cutoff: 0.5,
                                    ..RenderConfig::default() };
        let (geometry, style) = vector_blocks(&d, &config);
        assert!(geometry.starts_with(" 1 0.000000 0.500000 0.000000 0\n 1 0 0 0 0\n"));
        assert_eq!(style, " 1 0.500000 255 0 0 0\n");
    }

    #[test]
    fn vector_blocks_display_index() {
        let d = vec![displacement(1, [0.01, 0., 0.]),
                     displacement(2, [0., 0.5, 0.]),
                     displacement(4, [0., 0., -1.5])];
        let config = RenderConfig { colour: [0, 128, 255],
                                    radius: 0.25,
                                    ..RenderConfig::default() };
        let (geometry, style) = vector_blocks(&d, &config);
        assert_eq!(geometry,
                   " 1 0.000000 0.500000 0.000000 0\n 2 0 0 0 0\n 0 0 0 0 0\n \
                    2 0.000000 0.000000 -1.500000 0\n 4 0 0 0 0\n 0 0 0 0 0\n");
        assert_eq!(style,
                   " 1 0.250000 0 128 255 0\n 2 0.250000 0 128 255 0\n");
    }

    #[test]
    fn shrink_atom_types() {
        let section = "ATOMT\n  1         Na  1.9100 249 220  60 249 220  60 204\n  2         Cl  1.0200  49 252   2  49 252   2 204\n  0 0 0 0 0 0\n";
        assert_eq!(shrink_radii(section, TYPE_RECORD, 0.0001),
                   "ATOMT\n  1         Na  0.0001 249 220  60 249 220  60 204\n  2         Cl  0.0001  49 252   2  49 252   2 204\n  0 0 0 0 0 0\n");
    }

    #[test]
    fn shrink_bond_pairs() {
        let section = "BONDP\n  1  16  0.250  2.000 127 127 127\n";
        assert_eq!(shrink_radii(section, RADIUS_RECORDS[2].pattern, 0.0001),
                   "BONDP\n  1  16  0.0001  2.000 127 127 127\n");
    }

    #[test]
    fn shrink_search_bonds() {
        let section = "SBOND\n  1    Na    Cl    0.00000    3.10000  0  1  1  0  1  0.250  2.000 127 127 127\n  0 0 0 0\n";
        assert_eq!(shrink_radii(section, RADIUS_RECORDS[3].pattern, 0.0001),
                   "SBOND\n  1    Na    Cl    0.00000    3.10000  0  1  1  0  1  0.0001  2.000 127 127 127\n  0 0 0 0\n");
    }

    #[test]
    fn boundary_centred() {
        assert_eq!(boundary_block([0.5, 0.25, 0.]),
                   "BOUND\n 0.000000 1.000000 -0.250000 0.750000 -0.500000 0.500000\n 0 0 0 0 0\n");
    }

    #[test]
    fn splice_edits() {
        let edits = vec![Edit { name: "b",
                                range: 4..6,
                                text: String::from("XY") },
                         Edit { name: "a",
                                range: 1..1,
                                text: String::from("-") }];
        assert_eq!(splice("abcdefg", edits).unwrap(), "a-bcdXYg");
    }

    #[test]
    fn splice_overlap() {
        let edits = vec![Edit { name: "a",
                                range: 0..4,
                                text: String::new() },
                         Edit { name: "b",
                                range: 2..6,
                                text: String::new() }];
        assert_eq!(splice("abcdefg", edits), Err(FormatError::Overlap("a", "b")));
    }
}
