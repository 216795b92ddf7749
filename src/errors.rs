use thiserror::Error;

/// Errors raised while locating sections or reading data out of a VESTA file.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// A header token is not present in the file.
    /// MissingMarker(marker)
    #[error("Invalid file format: the \"{0}\" header is missing (only VESTA files can be parsed).")]
    MissingMarker(&'static str),
    /// The section is delimited by two headers that appear in the wrong order.
    /// OutOfOrder(section, start, end)
    #[error("Invalid file format: the {0} section expects \"{1}\" before \"{2}\".")]
    OutOfOrder(&'static str, &'static str, &'static str),
    /// The atom listing contains no recognisable atom records.
    #[error("Invalid file format: no atoms found between \"STRUC\" and \"THERI\".")]
    NoAtoms,
    /// A value inside a section cannot be read as a number.
    /// Unparsable(section, value)
    #[error("Invalid file format: \"{1}\" in the {0} section is not a number.")]
    Unparsable(&'static str, String),
    /// The lattice line holds fewer than three lengths or a non-positive one.
    #[error("Invalid file format: \"CELLP\" must be followed by three positive lattice lengths.")]
    Lattice,
    /// Two edits of the same template touch the same text.
    /// Overlap(section, section)
    #[error("Invalid file format: the {0} and {1} sections overlap.")]
    Overlap(&'static str, &'static str),
}

/// Raised when the reconciled snapshots still hold a different number of atoms.
#[derive(Debug, Error, PartialEq)]
#[error("Atom count mismatch: {initial} atoms before and {final_} atoms after relaxation.")]
pub struct ValidationError {
    pub initial: usize,
    pub final_: usize,
}

/// Errors in the user supplied atom indices.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An index outside of the atom list.
    /// OutOfRange(option, index, number of atoms)
    #[error("The index {1} passed to \"{0}\" is not in the range 1 to {2}.")]
    OutOfRange(&'static str, usize, usize),
}

/// Error for reading of Arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    /// Passed a value that isn't parsable.
    /// Unparsable(flag, value, type)
    #[error("The supplied value \"{1}\" for the option \"{0}\" is unparsable as a {2}.")]
    Unparsable(String, String, String),
    /// Passed the wrong number of values.
    /// WrongNumberOfValues(flag, expected, supplied)
    #[error("The option \"{0}\" takes {1} values, {2} were supplied.")]
    WrongNumberOfValues(String, usize, usize),
}

/// Any failure of the displacement pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
