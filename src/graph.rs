use bitflags::bitflags;

bitflags! {
    /// Renumbering applied while reading gSpan records. gSpan data usually
    /// counts from 0 while SDF counts atoms from 1.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Shift: u8 {
        const NONE =  0x0;
        /// add one to every vertex label before looking up its element
        const ATOMS = 0x1;
        /// add one to both endpoints of every edge
        const BONDS = 0x2;
    }
}

impl Shift {
    pub fn new(atoms: bool, bonds: bool) -> Self {
        let mut ret = Shift::NONE;
        ret.set(Shift::ATOMS, atoms);
        ret.set(Shift::BONDS, bonds);
        ret
    }

    /// None if shifting `index` would overflow
    pub(crate) fn atom(&self, index: usize) -> Option<usize> {
        index.checked_add(usize::from(self.contains(Shift::ATOMS)))
    }

    pub(crate) fn bond(&self, index: usize) -> Option<usize> {
        index.checked_add(usize::from(self.contains(Shift::BONDS)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    /// index into [crate::atoms::ATOMS], already shifted
    pub atom: usize,

    /// 1-based line of the input this vertex was read from
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,

    /// bond order or whatever else the input used, copied verbatim
    pub label: String,
}

/// One gSpan graph, as accumulated between two blank lines. Edge endpoints are
/// written out exactly as stored, so they have to refer to vertices by their
/// position in `vertices` in the numbering the output should use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// None if no `t` line was seen before the boundary
    pub name: Option<String>,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// whether nothing at all has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.vertices.is_empty() && self.edges.is_empty()
    }
}
