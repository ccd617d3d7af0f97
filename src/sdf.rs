//! Writing [Graph]s as V2000 molfiles. Every atom sits at the origin since
//! gSpan graphs carry no geometry.

use crate::{atoms::symbol_for, error::Result, graph::Graph};

/// program tag written on the second header line
pub const PROGRAM: &str = "GSPAN_2_SDF";

const COUNTS_SUFFIX: &str = "  0  0  0  0  0  0  0  0  1 V2000";
const ORIGIN: &str = "    0.0000    0.0000    0.0000";
const ATOM_SUFFIX: &str = "0  0  0  0  0  0  0  0  0  0  0  0";
const BOND_SUFFIX: &str = "  0  0  0  0";
const TERMINATOR: &str = "M  END\n$$$$";

/// name of the file holding the `ordinal`th graph, counting from 0
pub fn file_name(ordinal: usize) -> String {
    format!("{ordinal:06}.sdf")
}

/// the name, program, and comment lines
pub fn header(name: &str) -> String {
    format!("{name}\n{PROGRAM}\n\n")
}

pub fn counts_line(atoms: usize, bonds: usize) -> String {
    format!("{atoms:>3}{bonds:>3}{COUNTS_SUFFIX}\n")
}

pub fn atom_line(symbol: &str) -> String {
    format!("{ORIGIN} {symbol:<4}{ATOM_SUFFIX}\n")
}

pub fn bond_line(source: usize, target: usize, label: &str) -> String {
    format!("{source:>3}{target:>3}{label:>3}{BOND_SUFFIX}\n")
}

/// render `graph` as the contents of a single SDF file. fails if any vertex
/// label is past the end of the atom table
pub fn to_sdf(graph: &Graph) -> Result<String> {
    let mut out = String::new();
    if let Some(name) = &graph.name {
        out.push_str(&header(name));
    }
    out.push_str(&counts_line(graph.vertices.len(), graph.edges.len()));
    for v in &graph.vertices {
        out.push_str(&atom_line(symbol_for(v.atom, v.line)?));
    }
    for e in &graph.edges {
        out.push_str(&bond_line(e.source, e.target, &e.label));
    }
    out.push_str(TERMINATOR);
    Ok(out)
}

/// render the `ordinal`th graph, returning its file name and contents
pub fn render(graph: &Graph, ordinal: usize) -> Result<(String, String)> {
    Ok((file_name(ordinal), to_sdf(graph)?))
}

/// Summary of a rendered graph for debug logging.
pub struct Summary<'a>(pub &'a Graph);

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let g = self.0;
        match &g.name {
            Some(name) => f.write_str(name)?,
            None => f.write_str("<unnamed>")?,
        }
        write!(f, ": {} atoms, {} bonds", g.vertices.len(), g.edges.len())
    }
}
