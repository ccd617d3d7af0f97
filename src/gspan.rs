//! Reading gSpan graph databases. Only four kinds of lines matter:
//!
//! ```text
//! t # <id> <id> <name>     start of a graph, only the name is kept
//! v <id> <atom>            vertex labeled with an atom table index
//! e <src> <dst> <label>    edge between two vertices
//!                          blank line, end of the current graph
//! ```
//!
//! Anything else is skipped.

use std::io::{self, BufRead, Lines};

use log::{debug, trace};

use crate::{
    error::{ConvertError, Problem, Result},
    graph::{Edge, Graph, Shift, Vertex},
};

/// A single classified line of gSpan input, before any shift is applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Record<'a> {
    Boundary,
    GraphStart {
        name: &'a str,
    },
    Vertex {
        atom: usize,
    },
    Edge {
        source: usize,
        target: usize,
        label: &'a str,
    },
    /// unrecognized first token
    Other,
}

impl<'a> Record<'a> {
    /// classify `line` by its first whitespace-separated token. `lineno` is
    /// the 1-based line number used in error messages
    pub fn parse(line: &'a str, lineno: usize) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&kind) = words.first() else {
            return Ok(Record::Boundary);
        };
        let fields = Fields {
            words: &words,
            line,
            lineno,
        };
        let ret = match kind {
            "t" => Record::GraphStart {
                name: fields.get(4, "graph name")?,
            },
            "v" => Record::Vertex {
                atom: fields.number(2, "atom index")?,
            },
            "e" => Record::Edge {
                source: fields.number(1, "source vertex")?,
                target: fields.number(2, "target vertex")?,
                label: fields.get(3, "bond label")?,
            },
            _ => Record::Other,
        };
        Ok(ret)
    }
}

struct Fields<'w, 'a> {
    words: &'w [&'a str],
    line: &'a str,
    lineno: usize,
}

impl<'a> Fields<'_, 'a> {
    fn malformed(&self, problem: Problem) -> ConvertError {
        ConvertError::Malformed {
            line: self.lineno,
            problem,
            content: self.line.to_owned(),
        }
    }

    fn get(&self, field: usize, name: &'static str) -> Result<&'a str> {
        self.words
            .get(field)
            .copied()
            .ok_or_else(|| self.malformed(Problem::Missing { field, name }))
    }

    fn number(&self, field: usize, name: &'static str) -> Result<usize> {
        self.get(field, name)?
            .parse()
            .map_err(|_| self.malformed(Problem::Invalid { field, name }))
    }
}

/// Splits a stream of gSpan lines into [Graph]s, one for every blank line.
/// Yields at most one error, after which it is exhausted.
pub struct Segmenter<I> {
    lines: I,
    shift: Shift,
    flush_last: bool,
    current: Graph,
    lineno: usize,
    done: bool,
}

/// segment everything readable from `reader`
pub fn segment<R: BufRead>(reader: R, shift: Shift) -> Segmenter<Lines<R>> {
    Segmenter::new(reader.lines(), shift)
}

impl<I> Segmenter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, shift: Shift) -> Self {
        Self {
            lines,
            shift,
            flush_last: false,
            current: Graph::default(),
            lineno: 0,
            done: false,
        }
    }

    /// also emit whatever was accumulated after the last blank line when the
    /// input runs out. by default that graph is dropped
    pub fn flush_last(mut self, yes: bool) -> Self {
        self.flush_last = yes;
        self
    }

    fn fail(&mut self, err: ConvertError) -> Option<Result<Graph>> {
        self.done = true;
        Some(Err(err))
    }

    fn finish(&mut self) -> Option<Result<Graph>> {
        self.done = true;
        if self.current.is_empty() {
            return None;
        }
        if self.flush_last {
            return Some(Ok(std::mem::take(&mut self.current)));
        }
        debug!(
            "input ended without a blank line, dropping last graph ({:?})",
            self.current.name
        );
        None
    }

    /// fold one record read from `line` into the current graph, handing the
    /// graph out if the record ends it
    fn accept(
        &mut self,
        record: Record<'_>,
        line: &str,
    ) -> Result<Option<Graph>> {
        let lineno = self.lineno;
        let overflow = |field, name| ConvertError::Malformed {
            line: lineno,
            problem: Problem::Overflow { field, name },
            content: line.to_owned(),
        };
        match record {
            Record::Boundary => {
                return Ok(Some(std::mem::take(&mut self.current)))
            }
            Record::GraphStart { name } => {
                trace!("line {}: start of graph {name}", self.lineno);
                self.current.name = Some(name.to_owned());
            }
            Record::Vertex { atom } => {
                // shifting past usize::MAX is certainly past the atom table
                let shifted = self.shift.atom(atom).ok_or(
                    ConvertError::UnknownAtom {
                        index: atom,
                        line: lineno,
                    },
                )?;
                self.current.vertices.push(Vertex {
                    atom: shifted,
                    line: lineno,
                });
            }
            Record::Edge {
                source,
                target,
                label,
            } => {
                let source = self
                    .shift
                    .bond(source)
                    .ok_or_else(|| overflow(1, "source vertex"))?;
                let target = self
                    .shift
                    .bond(target)
                    .ok_or_else(|| overflow(2, "target vertex"))?;
                self.current.edges.push(Edge {
                    source,
                    target,
                    label: label.to_owned(),
                });
            }
            Record::Other => trace!("skipping line {}", self.lineno),
        }
        Ok(None)
    }
}

impl<I> Iterator for Segmenter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return self.fail(ConvertError::Read(e)),
                None => return self.finish(),
            };
            self.lineno += 1;
            let accepted = Record::parse(&line, self.lineno)
                .and_then(|record| self.accept(record, &line));
            match accepted {
                Ok(Some(graph)) => return Some(Ok(graph)),
                Ok(None) => {}
                Err(e) => return self.fail(e),
            }
        }
    }
}
