use crate::compose::compose;
use crate::config::RenderConfig;
use crate::displacement::{displacements, Displacement};
use crate::errors::Error;
use crate::reconcile::reconcile;
use crate::structure::Structure;

/// The annotated VESTA file and the displacements it was drawn from.
pub struct Output {
    pub text: String,
    pub displacements: Vec<Displacement>,
}

/// Runs the parse, reconcile, displace and compose stages in order.
///
/// The lattice lengths of the initial structure are used for both snapshots.
pub fn run(initial_text: String,
           final_text: String,
           config: &RenderConfig)
           -> Result<Output, Error> {
    let initial = Structure::parse(initial_text)?;
    let final_ = Structure::parse(final_text)?;
    let pair = reconcile(&initial,
                         &final_,
                         &config.atoms_removed,
                         &config.atoms_inserted)?;
    let displacements =
        displacements(&pair, initial.lattice_lengths, config.wrap.function());
    let text = compose(&final_.text, &initial, &displacements, config)?;
    Ok(Output { text,
                displacements })
}
