use crate::errors::{ConfigError, Error, ValidationError};
use crate::structure::Structure;
use log::info;
use rustc_hash::FxHashSet;

/// The atoms common to both snapshots, index aligned.
///
/// > initial: Vec<[f64; 3]> - fractional positions before relaxation
/// > final_: Vec<[f64; 3]> - fractional positions after relaxation
/// > sites: Vec<usize> - the 1-based index of each kept atom in the final file
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciled {
    pub initial: Vec<[f64; 3]>,
    pub final_: Vec<[f64; 3]>,
    pub sites: Vec<usize>,
}

/// Drops the atoms removed from the initial structure and the atoms inserted
/// into the final one.
///
/// Indices are 1-based and refer to the unmodified lists. The kept atoms are
/// copied in order, which gives the same result as deleting from the highest
/// index down.
pub fn reconcile(initial: &Structure,
                 final_: &Structure,
                 removed: &FxHashSet<usize>,
                 inserted: &FxHashSet<usize>)
                 -> Result<Reconciled, Error> {
    check_range("atoms-removed", removed, initial.positions.len())?;
    check_range("atoms-inserted", inserted, final_.positions.len())?;
    let initial_kept = kept(&initial.positions, removed);
    let (sites, final_kept): (Vec<usize>, Vec<[f64; 3]>) =
        final_.positions
              .iter()
              .enumerate()
              .map(|(i, p)| (i + 1, *p))
              .filter(|(site, _)| !inserted.contains(site))
              .unzip();
    if initial_kept.len() != final_kept.len() {
        return Err(ValidationError { initial: initial_kept.len(),
                                     final_: final_kept.len() }.into());
    }
    info!("Reconciled {} atoms ({} removed, {} inserted).",
          sites.len(),
          removed.len(),
          inserted.len());
    Ok(Reconciled { initial: initial_kept,
                    final_: final_kept,
                    sites })
}

/// Copies the positions whose 1-based index is not excluded.
fn kept(positions: &[[f64; 3]], excluded: &FxHashSet<usize>) -> Vec<[f64; 3]> {
    positions.iter()
             .enumerate()
             .filter(|(i, _)| !excluded.contains(&(i + 1)))
             .map(|(_, p)| *p)
             .collect()
}

/// Fails on the smallest index outside of 1..=len.
pub fn check_range(option: &'static str,
                   indices: &FxHashSet<usize>,
                   len: usize)
                   -> Result<(), ConfigError> {
    match indices.iter().filter(|i| **i == 0 || **i > len).min() {
        Some(i) => Err(ConfigError::OutOfRange(option, *i, len)),
        None => Ok(()),
    }
}
