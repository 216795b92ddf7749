use crate::reconcile::Reconciled;
use crate::utils;

/// Maps a fractional displacement along one axis onto the periodic image the
/// atom is assumed to have moved to.
pub type WrapFunction = fn(f64) -> f64;

/// Only displacements over half a lattice vector in the positive direction
/// are moved into the neighbouring cell, a delta of exactly 0.5 is kept.
pub fn one_sided(delta: f64) -> f64 {
    if delta > 0.5 {
        delta - 1.
    } else {
        delta
    }
}

/// Minimum image in both directions.
pub fn symmetric(delta: f64) -> f64 {
    if delta > 0.5 {
        delta - 1.
    } else if delta < -0.5 {
        delta + 1.
    } else {
        delta
    }
}

/// The cartesian displacement of one atom.
///
/// > site: usize - the 1-based index of the atom in the final file
/// > vector: [f64; 3] - the displacement in angstrom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    pub site: usize,
    pub vector: [f64; 3],
}

impl Displacement {
    /// The length of the displacement in angstrom.
    pub fn magnitude(&self) -> f64 {
        utils::norm(self.vector)
    }
}

/// Calculates the displacement of every reconciled atom, in order.
///
/// The cell is taken to be orthogonal, the wrapped fractional displacement is
/// scaled by the lattice lengths only.
pub fn displacements(pair: &Reconciled,
                     lattice_lengths: [f64; 3],
                     wrap: WrapFunction)
                     -> Vec<Displacement> {
    pair.initial
        .iter()
        .zip(&pair.final_)
        .zip(&pair.sites)
        .map(|((initial, final_), site)| {
            let mut delta = utils::subtract(*final_, *initial);
            for d in &mut delta {
                *d = wrap(*d);
            }
            Displacement { site: *site,
                           vector: utils::multiply(delta, lattice_lengths) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn pair(initial: Vec<[f64; 3]>, final_: Vec<[f64; 3]>) -> Reconciled {
        let sites = (1..=initial.len()).collect();
        Reconciled { initial,
                     final_,
                     sites }
    }

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(&b).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn wrap_half_unchanged() {
        assert_eq!(one_sided(0.5), 0.5)
    }

    #[test]
    fn wrap_over_half() {
        assert!((one_sided(0.5 + 1e-3) - (1e-3 - 0.5)).abs() < EPS)
    }

    #[test]
    fn wrap_negative_not_corrected() {
        assert_eq!(one_sided(-0.8), -0.8)
    }

    #[test]
    fn wrap_symmetric_negative() {
        assert!((symmetric(-0.8) - 0.2).abs() < EPS);
        assert_eq!(symmetric(-0.5), -0.5)
    }

    #[test]
    fn displacement_identical_is_zero() {
        let p = vec![[0.1, 0.2, 0.3], [0.9, 0.0, 0.5]];
        let d = displacements(&pair(p.clone(), p), [3., 4., 5.], one_sided);
        assert!(d.iter().all(|d| d.magnitude() == 0.))
    }

    #[test]
    fn displacement_across_boundary() {
        let d = displacements(&pair(vec![[0., 0., 0.], [0.1, 0.1, 0.1]],
                                    vec![[0.05, 0., 0.], [0.95, 0.1, 0.1]]),
                              [10., 10., 10.],
                              one_sided);
        assert!(close(d[0].vector, [0.5, 0., 0.]));
        assert!(close(d[1].vector, [-1.5, 0., 0.]));
        assert!((d[0].magnitude() - 0.5).abs() < EPS);
        assert!((d[1].magnitude() - 1.5).abs() < EPS);
    }

    #[test]
    fn displacement_lattice_scaling() {
        let d = displacements(&pair(vec![[0.; 3]], vec![[0.1, 0.2, 0.25]]),
                              [2., 5., 8.],
                              one_sided);
        assert!(close(d[0].vector, [0.2, 1., 2.]));
    }

    #[test]
    fn displacement_keeps_site() {
        let mut p = pair(vec![[0.; 3]; 2], vec![[0.; 3]; 2]);
        p.sites = vec![2, 5];
        let d = displacements(&p, [1.; 3], one_sided);
        assert_eq!(d.iter().map(|d| d.site).collect::<Vec<usize>>(), vec![2, 5]);
    }
}
