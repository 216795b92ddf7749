use crate::errors::FormatError;
use log::debug;
use rustc_hash::FxHashMap;
use std::ops::Range;

/// The header tokens of a VESTA file that the pipeline reads or rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Cellp,
    Struc,
    Theri,
    Bound,
    Sbond,
    Sitet,
    Vectr,
    Vectt,
    Atomt,
    Scene,
    Vects,
    Formp,
    Bondp,
    Polyp,
}

impl Marker {
    pub const ALL: [Marker; 14] = [Marker::Cellp,
                                   Marker::Struc,
                                   Marker::Theri,
                                   Marker::Bound,
                                   Marker::Sbond,
                                   Marker::Sitet,
                                   Marker::Vectr,
                                   Marker::Vectt,
                                   Marker::Atomt,
                                   Marker::Scene,
                                   Marker::Vects,
                                   Marker::Formp,
                                   Marker::Bondp,
                                   Marker::Polyp];

    /// The literal token as it appears at the start of the header line.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Cellp => "CELLP",
            Self::Struc => "STRUC",
            Self::Theri => "THERI",
            Self::Bound => "BOUND",
            Self::Sbond => "SBOND",
            Self::Sitet => "SITET",
            Self::Vectr => "VECTR",
            Self::Vectt => "VECTT",
            Self::Atomt => "ATOMT",
            Self::Scene => "SCENE",
            Self::Vects => "VECTS",
            Self::Formp => "FORMP",
            Self::Bondp => "BONDP",
            Self::Polyp => "POLYP",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.token() == token)
    }
}

/// A named region running from the start of one header line up to, but not
/// including, the next header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub name: &'static str,
    pub start: Marker,
    pub end: Marker,
}

pub const STRUCTURE: Section = Section { name: "structure",
                                         start: Marker::Struc,
                                         end: Marker::Theri };
pub const ATOM_TYPES: Section = Section { name: "atom type",
                                          start: Marker::Atomt,
                                          end: Marker::Scene };
pub const SITE_TYPES: Section = Section { name: "site type",
                                          start: Marker::Sitet,
                                          end: Marker::Vectr };
pub const BOND_PAIRS: Section = Section { name: "bond pair",
                                          start: Marker::Bondp,
                                          end: Marker::Polyp };
pub const SEARCH_BONDS: Section = Section { name: "search bond",
                                            start: Marker::Sbond,
                                            end: Marker::Sitet };
pub const VECTOR_SCALE: Section = Section { name: "vector scale",
                                            start: Marker::Vects,
                                            end: Marker::Formp };
pub const BOUNDARY: Section = Section { name: "boundary",
                                        start: Marker::Bound,
                                        end: Marker::Sbond };

/// Byte offsets of a header line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
    /// Start of the header line.
    pub start: usize,
    /// Start of the line after the header.
    pub body: usize,
}

/// The position of every known header in a document, recorded in one pass.
///
/// Headers must start at the first column, data lines in a VESTA file are
/// indented. Only the first occurrence of a header is kept.
pub struct SectionIndex<'a> {
    text: &'a str,
    headers: FxHashMap<Marker, Header>,
}

impl<'a> SectionIndex<'a> {
    /// Scans the text once and records the header positions.
    pub fn new(text: &'a str) -> Self {
        let mut headers = FxHashMap::default();
        let mut pos = 0;
        for line in text.split_inclusive('\n') {
            let start = pos;
            pos += line.len();
            if line.starts_with(char::is_whitespace) {
                continue;
            }
            let marker = match line.split_whitespace()
                                   .next()
                                   .and_then(Marker::from_token)
            {
                Some(m) => m,
                None => continue,
            };
            headers.entry(marker)
                   .or_insert(Header { start, body: pos });
        }
        debug!("Indexed {} of {} section headers.",
               headers.len(),
               Marker::ALL.len());
        Self { text, headers }
    }

    /// Finds a header or fails naming it.
    pub fn header(&self, marker: Marker) -> Result<Header, FormatError> {
        self.headers
            .get(&marker)
            .copied()
            .ok_or_else(|| FormatError::MissingMarker(marker.token()))
    }

    /// The byte range of a section, including its own header line.
    pub fn range(&self, section: Section) -> Result<Range<usize>, FormatError> {
        let start = self.header(section.start)?;
        let end = self.header(section.end)?;
        if end.start < start.body {
            return Err(FormatError::OutOfOrder(section.name,
                                               section.start.token(),
                                               section.end.token()));
        }
        Ok(start.start..end.start)
    }

    /// The text of a section, including its own header line.
    pub fn slice(&self, section: Section) -> Result<&'a str, FormatError> {
        let range = self.range(section)?;
        Ok(&self.text[range])
    }

    /// The single line directly after a header, without its line ending.
    pub fn line_after(&self, marker: Marker) -> Result<&'a str, FormatError> {
        let header = self.header(marker)?;
        let rest = &self.text[header.body..];
        let line = rest.split('\n').next().unwrap_or("");
        Ok(line.trim_end_matches('\r'))
    }
}
