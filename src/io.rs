use std::fs;
use std::io;

pub mod output;

/// Read a whole VESTA file into a String.
pub fn read(filename: &str) -> io::Result<String> {
    fs::read_to_string(filename)
}
