//! Depth-first (pre-order) traversal of an arena tree

use super::{ArenaNode, NodeId, Tree};

/// Iterator for a pre-order depth-first iteration. A node is visited before its
/// children, children are visited from left to right. The iterator holds its own
/// cursor, so traversals can be restarted at will.
pub struct DepthFirstIterator<'a, Load> {
    tree: &'a Tree<Load>,
    stack: Vec<std::slice::Iter<'a, NodeId>>,
    root: Option<&'a ArenaNode<Load>>,
}

impl<'a, Load> DepthFirstIterator<'a, Load> {
    /// Starts at `root`. Yields nothing if `root` is not part of the tree.
    pub fn new(tree: &'a Tree<Load>, root: NodeId) -> Self {
        DepthFirstIterator {
            tree,
            stack: Vec::new(),
            root: tree.node(root),
        }
    }

    /// Distance of the most recently yielded node to the start node
    pub fn level(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<'a, Load> Iterator for DepthFirstIterator<'a, Load> {
    type Item = &'a ArenaNode<Load>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children.iter());
            return Some(root);
        }
        while let Some(last) = self.stack.last_mut() {
            match last.next() {
                Some(child) => {
                    if let Some(node) = self.tree.node(*child) {
                        self.stack.push(node.children.iter());
                        return Some(node);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
