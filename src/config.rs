use crate::displacement::{self, WrapFunction};
use rustc_hash::FxHashSet;

/// Which periodic image a displacement is wrapped onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wrap {
    /// Only wrap displacements over +0.5.
    OneSided,
    /// Wrap displacements over +0.5 and under -0.5.
    Symmetric,
}

impl Wrap {
    pub fn function(&self) -> WrapFunction {
        match self {
            Self::OneSided => displacement::one_sided,
            Self::Symmetric => displacement::symmetric,
        }
    }
}

/// Settings that control how the vectors are drawn, fixed once read.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// RGB colour of the vectors.
    pub colour: [u8; 3],
    /// Radius of the vectors in angstrom.
    pub radius: f64,
    /// Vectors no longer than this, in angstrom, are not drawn.
    pub cutoff: f64,
    /// Multiplies the length of every drawn vector.
    pub scale_factor: f64,
    /// 1-based index of the atom, in the initial file, to centre the boundary on.
    pub centre_atom: Option<usize>,
    /// 1-based indices of atoms in the initial file missing from the final file.
    pub atoms_removed: FxHashSet<usize>,
    /// 1-based indices of atoms in the final file missing from the initial file.
    pub atoms_inserted: FxHashSet<usize>,
    /// Radius written over the atom and bond radii.
    pub shrink_radius: f64,
    pub wrap: Wrap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { colour: [255, 0, 0],
               radius: 0.5,
               cutoff: 0.1,
               scale_factor: 1.0,
               centre_atom: None,
               atoms_removed: FxHashSet::default(),
               atoms_inserted: FxHashSet::default(),
               shrink_radius: 0.0001,
               wrap: Wrap::OneSided }
    }
}
