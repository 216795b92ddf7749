use anyhow::{Context, Result};
use vesta_vectors::arguments::{Args, ClapApp};
use vesta_vectors::io::{self, output};
use vesta_vectors::pipeline;

fn main() -> Result<()> {
    env_logger::init();
    // argument parsing
    let app = ClapApp::App.get();
    let args = Args::new(app.get_matches())?;
    // print splash
    println!("VESTA displacement vectors ({})", env!("CARGO_PKG_VERSION"));
    println!("Reading in data...");
    let initial = io::read(&args.initial)
        .with_context(|| format!("Failed to read {}", args.initial))?;
    let final_ = io::read(&args.final_)
        .with_context(|| format!("Failed to read {}", args.final_))?;
    println!("Calculating...");
    let vectors = pipeline::run(initial, final_, &args.config)
        .context("Building the vectors file")?;
    println!("{}",
             output::vectors_table(&vectors.displacements, args.config.cutoff));
    println!("Printing to file {}", args.output);
    // nothing is written unless every stage succeeded
    output::write(vectors.text, &args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;
    println!("All done.");
    Ok(())
}
