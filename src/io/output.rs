use crate::displacement::Displacement;
use prettytable::{format, row, Row, Table};
use std::fs::File;
use std::io::Write;

/// Creates a format for the summary table.
pub fn table_format() -> format::TableFormat {
    let line_position =
        &[format::LinePosition::Title, format::LinePosition::Bottom];
    let line_separator = format::LineSeparator::new('-', '+', '+', '+');
    format::FormatBuilder::new().column_separator('|')
                                .separators(line_position, line_separator)
                                .padding(1, 1)
                                .build()
}

/// Header for the summary table.
pub fn vectors_titles() -> Row {
    row![c => "#", "Atom", "dX", "dY", "dZ", "Length"]
}

/// Tabulates the displacements that are drawn, numbered as in the VESTA file.
///
/// * `displacements`: The displacement of every reconciled atom.
/// * `cutoff`: Displacements no longer than this are left out.
pub fn vectors_table(displacements: &[Displacement], cutoff: f64) -> String {
    let mut table = Table::new();
    table.set_format(table_format());
    table.set_titles(vectors_titles());
    displacements.iter()
                 .filter(|d| d.magnitude() > cutoff)
                 .enumerate()
                 .for_each(|(i, d)| {
                     let i_str = format!("{}", i + 1);
                     let s_str = format!("{}", d.site);
                     let x_str = format!("{:.6}", d.vector[0]);
                     let y_str = format!("{:.6}", d.vector[1]);
                     let z_str = format!("{:.6}", d.vector[2]);
                     let m_str = format!("{:.6}", d.magnitude());
                     table.add_row(row![r => i_str, s_str, x_str, y_str, z_str, m_str]);
                 });
    table.to_string()
}

/// Write the file
///
/// * `text`: The contents, as a String, of the file.
/// * `filename`: Where to write it.
pub fn write(text: String, filename: &str) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
