//! Nodes stored in the arena of a [Tree](super::Tree).

use core::fmt;

/// Identity of a node inside its tree's arena. Identifiers are handed out
/// sequentially and never reused, so an id of a pruned node stays invalid.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena allocation
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Container that holds data in a tree
pub trait Nodelike<Load> {
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Load;
    fn id(&self) -> NodeId;
    /// `None` for the root and for detached nodes
    fn parent(&self) -> Option<NodeId>;
    fn children(&self) -> &[NodeId];
}

/// A node structure to be used in an arena allocated tree.
#[derive(Debug, Clone)]
pub struct ArenaNode<Load> {
    /// The user-defined load that the node owns
    pub(super) load: Load,
    /// Index in the arena allocation
    pub(super) id: NodeId,
    /// Ordered references to the children. This is the owning relation.
    pub(super) children: Vec<NodeId>,
    /// Back reference for upward navigation. Never implies ownership.
    pub(super) parent: Option<NodeId>,
}

impl<Load> ArenaNode<Load> {
    pub(super) fn new(load: Load, id: NodeId) -> Self {
        ArenaNode {
            load,
            id,
            children: vec![],
            parent: None,
        }
    }
}

impl<Load> Nodelike<Load> for ArenaNode<Load> {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn get(&self) -> &Load {
        &self.load
    }

    fn id(&self) -> NodeId {
        self.id
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl<Load> fmt::Display for ArenaNode<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}, children: {:?}, payload: {}", self.id, self.children, self.load)
    }
}
