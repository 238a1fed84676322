//! Diagnostic text dump of a graph.
//!
//! Output layout:
//!
//! ```text
//! Nodes:
//! 1 2 3
//!
//! Links:
//! 0 0 1
//! 0 0 0
//! 1 0 0
//! ```
//!
//! Every value is followed by a single space. The dump only reads state.

use std::fmt;
use std::io::{self, Write};

use crate::graph::Graph;
use crate::models::{AdjacencyMatrix, NodeRegistry};

/// Borrowed view rendering nodes and matrix as text.
#[derive(Debug, Clone, Copy)]
pub struct GraphDump<'a> {
    registry: &'a NodeRegistry,
    matrix: &'a AdjacencyMatrix,
}

impl<'a> GraphDump<'a> {
    /// Create a dump over registry and matrix.
    pub fn new(registry: &'a NodeRegistry, matrix: &'a AdjacencyMatrix) -> Self {
        Self { registry, matrix }
    }
}

impl fmt::Display for GraphDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes:")?;
        for id in self.registry.iter() {
            write!(f, "{} ", id)?;
        }
        write!(f, "\n\n")?;

        writeln!(f, "Links:")?;
        for row in self.matrix.rows() {
            for weight in row {
                write!(f, "{} ", weight)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Write the dump of `graph` to `out`.
pub fn write_graph<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    write!(out, "{}", graph.dump())
}

/// Print the dump of `graph` to stdout.
pub fn print_graph(graph: &Graph) {
    print!("{}", graph.dump());
}
