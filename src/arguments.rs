use crate::config::{RenderConfig, Wrap};
use crate::errors::ArgumentError;
use clap::{crate_authors, Arg, ArgMatches, Command};
use rustc_hash::FxHashSet;
use std::str::FromStr;

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command<'static> {
        Command::new("vesta-vectors")
            .author(crate_authors!())
            .version(env!("CARGO_PKG_VERSION"))
            .about("Draws the displacement of every atom during a relaxation as vectors in a VESTA file.")
            .arg(Arg::new("filenames")
                .short('f')
                .long("filenames")
                .takes_value(true)
                .number_of_values(2)
                .value_names(&["INITIAL", "FINAL"])
                .default_values(&["initial.vesta", "final.vesta"])
                .help("The VESTA files before and after relaxation."))
            .arg(Arg::new("colour")
                .short('c')
                .long("colour")
                .takes_value(true)
                .number_of_values(3)
                .value_names(&["R", "G", "B"])
                .default_values(&["255", "0", "0"])
                .help("Vector colour in RGB."))
            .arg(Arg::new("radius")
                .short('r')
                .long("radius")
                .takes_value(true)
                .default_value("0.5")
                .help("Vector radius in angstrom."))
            .arg(Arg::new("cutoff")
                .short('x')
                .long("cutoff")
                .takes_value(true)
                .default_value("0.1")
                .help("Displacements no longer than this (in angstrom) are not drawn."))
            .arg(Arg::new("scale factor")
                .short('s')
                .long("scale-factor")
                .takes_value(true)
                .default_value("1.0")
                .help("Scale the length of every vector by this amount."))
            .arg(Arg::new("atoms removed")
                .long("atoms-removed")
                .takes_value(true)
                .multiple_values(true)
                .help("Atoms in the initial structure that are not in the final structure.")
                .long_help(
"The index (counting from one) of every atom in the initial structure which has
been removed in the final structure. These atoms are ignored when pairing up the
atoms of the two structures."))
            .arg(Arg::new("atoms inserted")
                .long("atoms-inserted")
                .takes_value(true)
                .multiple_values(true)
                .help("Atoms in the final structure that are not in the initial structure.")
                .long_help(
"The index (counting from one) of every atom in the final structure which has
been inserted during the relaxation. These atoms are ignored when pairing up the
atoms of the two structures."))
            .arg(Arg::new("centre atom")
                .short('a')
                .long("centre-atom")
                .takes_value(true)
                .help("Centre the drawn cell on this atom of the initial structure.")
                .long_help(
"The index (counting from one) of an atom in the initial structure. The boundary
of the output is set to one unit cell centred on the initial position of this
atom."))
            .arg(Arg::new("wrap")
                .short('w')
                .long("wrap")
                .takes_value(true)
                .possible_values(["one-sided", "symmetric"])
                .default_value("one-sided")
                .help("How displacements across the cell boundary are treated.")
                .long_help(
"Fractional displacements over half a lattice vector are taken to have crossed
into the neighbouring cell. \"one-sided\" only corrects positive displacements,
\"symmetric\" corrects both directions."))
            .arg(Arg::new("shrink")
                .long("shrink")
                .takes_value(true)
                .default_value("0.0001")
                .help("Radius given to every atom and bond so the vectors stand out."))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .default_value("vectors.vesta")
                .help("The VESTA file to write."))
    }
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub initial: String,
    pub final_: String,
    pub output: String,
    pub config: RenderConfig,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Result<Self, ArgumentError> {
        let filenames = values(&arguments, "filenames");
        let (initial, final_) = match filenames.as_slice() {
            [i, f] => (i.clone(), f.clone()),
            v => {
                return Err(ArgumentError::WrongNumberOfValues(String::from("filenames"),
                                                              2,
                                                              v.len()))
            }
        };
        let colour = match values(&arguments, "colour").as_slice() {
            [r, g, b] => {
                let rgb = "integer from 0 to 255";
                [parse("colour", r, rgb)?,
                 parse("colour", g, rgb)?,
                 parse("colour", b, rgb)?]
            }
            v => {
                return Err(ArgumentError::WrongNumberOfValues(String::from("colour"),
                                                              3,
                                                              v.len()))
            }
        };
        let radius = parse_value(&arguments, "radius", "float")?;
        let cutoff = parse_value(&arguments, "cutoff", "float")?;
        let scale_factor = parse_value(&arguments, "scale factor", "float")?;
        let shrink_radius = parse_value(&arguments, "shrink", "float")?;
        let atoms_removed = indices(&arguments, "atoms removed")?;
        let atoms_inserted = indices(&arguments, "atoms inserted")?;
        let centre_atom = match arguments.value_of("centre atom") {
            Some(s) => Some(parse("centre atom", s, "integer")?),
            None => None,
        };
        let wrap = match arguments.value_of("wrap") {
            Some("symmetric") => Wrap::Symmetric,
            _ => Wrap::OneSided,
        };
        // safe to unwrap as output has a default value
        let output = String::from(arguments.value_of("output").unwrap());
        let config = RenderConfig { colour,
                                    radius,
                                    cutoff,
                                    scale_factor,
                                    centre_atom,
                                    atoms_removed,
                                    atoms_inserted,
                                    shrink_radius,
                                    wrap };
        Ok(Self { initial,
                  final_,
                  output,
                  config })
    }
}

/// Every value given to a flag, empty if the flag is absent.
fn values(arguments: &ArgMatches, flag: &str) -> Vec<String> {
    match arguments.values_of(flag) {
        Some(x) => x.map(String::from).collect(),
        None => Vec::with_capacity(0),
    }
}

fn parse<T: FromStr>(flag: &str,
                     value: &str,
                     typ: &str)
                     -> Result<T, ArgumentError> {
    value.parse::<T>().map_err(|_| {
                          ArgumentError::Unparsable(String::from(flag),
                                                    String::from(value),
                                                    String::from(typ))
                      })
}

/// Parses a flag that has a default value.
fn parse_value<T: FromStr>(arguments: &ArgMatches,
                           flag: &str,
                           typ: &str)
                           -> Result<T, ArgumentError> {
    let value = arguments.value_of(flag).unwrap_or_default();
    parse(flag, value, typ)
}

fn indices(arguments: &ArgMatches,
           flag: &str)
           -> Result<FxHashSet<usize>, ArgumentError> {
    values(arguments, flag).iter()
                           .map(|v| parse(flag, v, "integer"))
                           .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: Vec<&str>) -> Result<Args, ArgumentError> {
        let app = ClapApp::App.get();
        Args::new(app.get_matches_from(v))
    }

    #[test]
    fn clapapp_get() {
        let app = ClapApp::App.get();
        assert_eq!(app.get_name(), "vesta-vectors")
    }

    #[test]
    fn argument_defaults() {
        let args = args(vec!["vesta-vectors"]).unwrap();
        assert_eq!(args.initial, String::from("initial.vesta"));
        assert_eq!(args.final_, String::from("final.vesta"));
        assert_eq!(args.output, String::from("vectors.vesta"));
        assert_eq!(args.config, RenderConfig::default());
    }

    #[test]
    fn argument_filenames() {
        let args =
            args(vec!["vesta-vectors", "-f", "POSCAR.vesta", "CONTCAR.vesta"]).unwrap();
        assert_eq!(args.initial, String::from("POSCAR.vesta"));
        assert_eq!(args.final_, String::from("CONTCAR.vesta"));
    }

    #[test]
    #[should_panic]
    fn argument_one_filename() {
        let app = ClapApp::App.get();
        let _ = app.try_get_matches_from(vec!["vesta-vectors", "-f", "POSCAR.vesta"])
                   .unwrap_or_else(|e| panic!("An error occurs: {}", e));
    }

    #[test]
    fn argument_colour() {
        let args = args(vec!["vesta-vectors", "-c", "0", "128", "255"]).unwrap();
        assert_eq!(args.config.colour, [0, 128, 255]);
    }

    #[test]
    fn argument_colour_out_of_range() {
        let args = args(vec!["vesta-vectors", "--colour", "0", "256", "0"]);
        assert_eq!(args.err(),
                   Some(ArgumentError::Unparsable(String::from("colour"),
                                                  String::from("256"),
                                                  String::from("integer from 0 to 255"))));
    }

    #[test]
    fn argument_floats() {
        let args = args(vec!["vesta-vectors", "-r", "0.2", "-x", "0.05", "-s",
                             "2.5", "--shrink", "0.01"]).unwrap();
        assert_eq!(args.config.radius, 0.2);
        assert_eq!(args.config.cutoff, 0.05);
        assert_eq!(args.config.scale_factor, 2.5);
        assert_eq!(args.config.shrink_radius, 0.01);
    }

    #[test]
    fn argument_cutoff_not_float() {
        let args = args(vec!["vesta-vectors", "--cutoff", "0.00.1"]);
        assert!(args.is_err());
    }

    #[test]
    fn argument_atoms_removed() {
        let args = args(vec!["vesta-vectors", "--atoms-removed", "3", "1",
                             "--atoms-inserted", "7"]).unwrap();
        let removed: FxHashSet<usize> = vec![1, 3].into_iter().collect();
        let inserted: FxHashSet<usize> = vec![7].into_iter().collect();
        assert_eq!(args.config.atoms_removed, removed);
        assert_eq!(args.config.atoms_inserted, inserted);
    }

    #[test]
    fn argument_atoms_removed_not_int() {
        let args = args(vec!["vesta-vectors", "--atoms-removed", "one"]);
        assert!(args.is_err());
    }

    #[test]
    fn argument_centre_atom() {
        let args = args(vec!["vesta-vectors", "-a", "4"]).unwrap();
        assert_eq!(args.config.centre_atom, Some(4));
    }

    #[test]
    fn argument_wrap_symmetric() {
        let args = args(vec!["vesta-vectors", "-w", "symmetric"]).unwrap();
        assert_eq!(args.config.wrap, Wrap::Symmetric);
    }

    #[test]
    #[should_panic]
    fn argument_wrap_not_wrap() {
        let app = ClapApp::App.get();
        let _ = app.try_get_matches_from(vec!["vesta-vectors", "-w", "both"])
                   .unwrap_or_else(|e| panic!("An error occurs: {}", e));
    }

    #[test]
    fn argument_output() {
        let args = args(vec!["vesta-vectors", "-o", "relaxed.vesta"]).unwrap();
        assert_eq!(args.output, String::from("relaxed.vesta"));
    }
}
