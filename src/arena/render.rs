//! Textual, depth-indented representation of a tree: one line per node in depth-first order,
//! each load prefixed with [MARKER] repeated once per level (e.g., `--|--|leaf` at depth 2).

use super::{NodeId, Tree};
use std::fmt::{self, Write};

/// Indentation marker, repeated once per level
pub const MARKER: &str = "--|";

impl<Load> Tree<Load>
where
    Load: fmt::Display,
{
    /// Renders the sub-tree of `node` as if `node` sat at `depth`. Empty if `node` is unknown.
    pub fn render_from(&self, node: NodeId, depth: usize) -> String {
        self.render_with_marker(node, depth, MARKER)
    }

    /// Renders the whole tree
    pub fn render(&self) -> String {
        self.render_from(self.root(), 0)
    }

    pub fn render_with_marker(&self, node: NodeId, depth: usize, marker: &str) -> String {
        let mut out = String::new();
        self.write_from(&mut out, node, depth, marker)
            .expect("Internal error. Writing into a String cannot fail!");
        out
    }

    fn write_from<W: Write>(&self, out: &mut W, id: NodeId, depth: usize, marker: &str) -> fmt::Result {
        let mut nodes = self.iter_depth(id);
        while let Some(node) = nodes.next() {
            writeln!(out, "{}{}", marker.repeat(depth + nodes.level()), node.load)?;
        }
        Ok(())
    }
}

impl<Load> fmt::Display for Tree<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_from(f, self.root(), 0, MARKER)
    }
}
