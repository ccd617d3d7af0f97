//! Lookup from gSpan vertex labels to element symbols.

use crate::error::{ConvertError, Result};

/// Element symbols in (mostly) atomic number order, starting from hydrogen at
/// index 0. The tail past Ra is not in atomic number order and Pt and Rh each
/// appear twice. Existing gSpan datasets were labeled against this exact
/// table, so it is kept as is.
pub const ATOMS: [&str; 85] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al",
    "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe",
    "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr",
    "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt",
    "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Pt", "Ac",
    "La", "U", "Sm", "Ce", "Nd", "Eu", "Gd", "Dy", "Er", "Rh",
];

/// returns the element symbol for `index`. `line` is only used to point the
/// error at the offending vertex
pub fn symbol_for(index: usize, line: usize) -> Result<&'static str> {
    ATOMS
        .get(index)
        .copied()
        .ok_or(ConvertError::UnknownAtom { index, line })
}
