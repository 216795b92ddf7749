//! Draws the displacement of every atom during an ionic relaxation as vectors
//! in a [VESTA] file. The structure before and after the relaxation are read
//! from two VESTA files that share the same layout, the atoms are paired up,
//! their displacements found under periodic boundary conditions and the final
//! file is rewritten with a vector on each atom that moved more than a cutoff.
//! The atoms and bonds are shrunk so that the vectors stand out.
//!
//! ## Installing the binary
//! ### From Source
//! ```sh
//! $ cargo build --verbose --release
//! $ mv ./target/release/vesta-vectors ~/bin
//! ```
//!
//! ## Usage
//! Export both structures from VESTA (File > Save File) and pass them to the
//! program, the annotated structure is written to vectors.vesta.
//! ```sh
//! $ vesta-vectors -f POSCAR.vesta CONTCAR.vesta -x 0.05 -s 5
//! ```
//! If atoms were removed from, or added to, the structure during the
//! calculation their indices (counting from one) have to be given so that the
//! remaining atoms can be paired.
//! ```sh
//! $ vesta-vectors --atoms-removed 12 --atoms-inserted 40 41
//! ```
//! For a detailed list of usage options run
//! ```sh
//! $ vesta-vectors --help
//! ```
//! ## Limitations
//! Only the lattice lengths are read, the cell is assumed to be orthogonal.
//!
//! The atom, site and bond radii are copied from the initial file. When atoms
//! were inserted the final file lists more sites than its SITET block, so a
//! vector drawn on an inserted site has no site style of its own.
//! ## License
//! MIT
//!
//! [VESTA]: <https://jp-minerals.org/vesta/en/>

/// For parsing command-line arguments.
pub mod arguments;
/// Writes the displacement vectors, shrunk radii, vector scale and boundary
/// into the final VESTA file.
pub mod compose;
/// Contains [RenderConfig](config::RenderConfig), the settings for drawing
/// the vectors.
pub mod config;
/// Calculates the [Displacement](displacement::Displacement) of each atom and
/// provides the periodic wrap policies.
pub mod displacement;
/// Provides custom errors types.
pub mod errors;
/// Handles the File I/O for the VESTA files and the summary table.
pub mod io;
/// Runs the whole calculation from the text of the two files.
pub mod pipeline;
/// Pairs the atoms of the two structures when atoms were removed or inserted.
pub mod reconcile;
/// Locates the marker delimited sections of a VESTA file.
pub mod sections;
/// Contains [Structure](structure::Structure) for storing the positions and
/// lattice read from a VESTA file.
pub mod structure;
/// Misc functions for vector manipulation.
pub mod utils;
