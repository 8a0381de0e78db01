//! The arena allocated N-ary [Tree].

use super::{ArenaNode, BreadthFirstIterator, DepthFirstIterator, NodeId, Nodelike};
use crate::ArboretumError;
use itertools::Itertools;
use std::iter;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// N-ary tree whose nodes live in an arena owned by the tree.
///
/// Nodes are addressed by [NodeId]s. A node is *attached* if it can be reached
/// from the root, otherwise it is *detached*: freshly created with
/// [Tree::create_node] or taken out with [Tree::remove_child]. Detached nodes
/// keep their own children and can be attached again.
///
/// Children are owned by exactly one parent. The parent link is a plain id
/// looked up in the arena and is only used for upward navigation.
#[derive(Debug, Clone)]
pub struct Tree<Load> {
    /// Memory allocated area for nodes. Pruned slots stay `None` so ids are never reused.
    pub(crate) nodes: Vec<Option<ArenaNode<Load>>>,
    root: NodeId,
    count: usize,
}

impl<Load> Tree<Load> {
    /// Creates a tree consisting of a single root node.
    pub fn new(root_load: Load) -> Self {
        Self::with_capacity(root_load, 1)
    }

    /// Like [Tree::new] but reserves room for `capacity` nodes.
    pub fn with_capacity(root_load: Load, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Some(ArenaNode::new(root_load, NodeId(0))));
        Tree {
            nodes,
            root: NodeId(0),
            count: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &ArenaNode<Load> {
        self.nodes[self.root.0]
            .as_ref()
            .expect("Internal error. The root cannot be pruned!")
    }

    /// Number of live nodes in the arena, attached or not
    pub fn node_count(&self) -> usize {
        self.count
    }

    pub fn node(&self, id: NodeId) -> Option<&ArenaNode<Load>> {
        self.nodes.get(id.0)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode<Load>> {
        self.nodes.get_mut(id.0)?.as_mut()
    }

    pub fn get(&self, id: NodeId) -> Option<&Load> {
        self.node(id).map(|node| &node.load)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Load> {
        self.node_mut(id).map(|node| &mut node.load)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).map(|node| node.children.as_slice())
    }

    /// The chain of parents of `id`, starting with its direct parent.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Distance to the root (or to the top of a detached sub-tree).
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.node(id)?;
        Some(self.ancestors(id).count())
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root || self.ancestors(id).any(|ancestor| ancestor == self.root)
    }

    /// Whether the node `id` lies in the sub-tree starting at `start` (including `start` itself).
    /// Compares identities, not loads.
    pub fn contains(&self, start: NodeId, id: NodeId) -> bool {
        self.node(id).is_some() && (id == start || self.ancestors(id).any(|ancestor| ancestor == start))
    }

    /// Allocates a new, detached leaf. Use [Tree::add_child] to attach it.
    pub fn create_node(&mut self, load: Load) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(ArenaNode::new(load, id)));
        self.count += 1;
        id
    }

    /// Checks whether `child` may become a child of `parent`
    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), ArboretumError> {
        self.node(parent).ok_or(ArboretumError::UnknownNode(parent))?;
        let node = self.node(child).ok_or(ArboretumError::UnknownNode(child))?;
        if child == self.root {
            return Err(ArboretumError::RootNotAttachable(child));
        }
        if node.parent.is_some() {
            return Err(ArboretumError::AlreadyAttached(child));
        }
        // a detached node can only be above `parent` if `parent` sits in its sub-tree
        if self.contains(child, parent) {
            return Err(ArboretumError::WouldCycle { parent, child });
        }
        Ok(())
    }

    /// Links two nodes, the checks must have been run before
    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        debug!(%parent, %child, "attached");
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// A node has at most one parent: attaching a node that already has one is refused
    /// with [ArboretumError::AlreadyAttached]. Remove it from its old parent first.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), ArboretumError> {
        self.check_attachable(parent, child)?;
        self.link(parent, child);
        Ok(())
    }

    /// Creates a leaf holding `load` and appends it to the children of `parent`.
    #[instrument(level = "trace", skip(self, load))]
    pub fn add_child_value(&mut self, parent: NodeId, load: Load) -> Result<NodeId, ArboretumError> {
        self.node(parent).ok_or(ArboretumError::UnknownNode(parent))?;
        let child = self.create_node(load);
        self.link(parent, child);
        Ok(child)
    }

    /// Appends several children in order. Either all of them are attached or, on error, none.
    #[instrument(level = "trace", skip(self, children))]
    pub fn add_children<I>(&mut self, parent: NodeId, children: I) -> Result<(), ArboretumError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let children = children.into_iter().collect_vec();
        if let Some(duplicate) = children.iter().duplicates().next() {
            return Err(ArboretumError::DuplicateChild(*duplicate));
        }
        children
            .iter()
            .try_for_each(|child| self.check_attachable(parent, *child))?;
        children.into_iter().for_each(|child| self.link(parent, child));
        Ok(())
    }

    /// Detaches `target` if it lies somewhere below `parent` (immediate child or deeper).
    /// The sub-tree of `target` stays intact and can be attached again.
    ///
    /// Nodes are matched by identity, an equal looking sub-tree elsewhere is never touched.
    /// Returns `None` and does nothing if `target` is not a descendant of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, target: NodeId) -> Option<NodeId> {
        if target == parent || !self.contains(parent, target) {
            trace!("not a descendant, nothing removed");
            return None;
        }
        let direct_parent = self.parent(target)?;
        let siblings = &mut self.node_mut(direct_parent)?.children;
        let position = siblings.iter().position(|id| *id == target)?;
        siblings.remove(position);
        self.node_mut(target)?.parent = None;
        debug!(parent = %direct_parent, child = %target, "detached");
        Some(target)
    }

    /// Like [Tree::remove_child], but frees the removed sub-tree from the arena.
    /// Returns the loads of the removed nodes in depth-first order.
    #[instrument(level = "trace", skip(self))]
    pub fn prune(&mut self, parent: NodeId, target: NodeId) -> Option<Vec<Load>> {
        self.remove_child(parent, target)?;
        Some(self.free_subtree(target))
    }

    /// Frees a detached sub-tree (see [Tree::create_node] and [Tree::remove_child]) and
    /// returns its loads in depth-first order. `None` for the root, attached or unknown nodes.
    ///
    /// Freed slots are never handed out again, so ids of discarded nodes stay invalid.
    #[instrument(level = "trace", skip(self))]
    pub fn discard(&mut self, id: NodeId) -> Option<Vec<Load>> {
        if id == self.root || self.node(id)?.parent.is_some() {
            trace!("not a detached sub-tree, nothing discarded");
            return None;
        }
        Some(self.free_subtree(id))
    }

    fn free_subtree(&mut self, top: NodeId) -> Vec<Load> {
        let ids = self.iter_depth(top).map(|node| node.id).collect_vec();
        let loads = ids
            .into_iter()
            .filter_map(|id| self.nodes[id.0].take())
            .map(|node| node.load)
            .collect_vec();
        self.count -= loads.len();
        debug!(root = %top, removed = loads.len(), "freed");
        loads
    }

    /// First node in depth-first order below (and including) `start` for which `predicate` holds.
    pub fn find_by<F>(&self, start: NodeId, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&Load) -> bool,
    {
        self.iter_depth(start)
            .find(|node| predicate(&node.load))
            .map(|node| node.id)
    }

    /// First node in depth-first order below (and including) `start` holding `load`.
    pub fn find(&self, start: NodeId, load: &Load) -> Option<NodeId>
    where
        Load: PartialEq,
    {
        self.find_by(start, |candidate| candidate == load)
    }

    /// First node in depth-first order below (and including) `start` whose sub-tree is
    /// structurally equal to the sub-tree of `pattern_node` in `pattern`.
    pub fn find_matching(&self, start: NodeId, pattern: &Tree<Load>, pattern_node: NodeId) -> Option<NodeId>
    where
        Load: PartialEq,
    {
        pattern.node(pattern_node)?;
        self.iter_depth(start)
            .find(|node| self.subtree_eq(node.id, pattern, pattern_node))
            .map(|node| node.id)
    }

    /// Structural equality of two sub-trees: equal loads and pairwise equal children
    /// in the same order. Parent links and ids are ignored.
    pub fn subtree_eq(&self, id: NodeId, other: &Tree<Load>, other_id: NodeId) -> bool
    where
        Load: PartialEq,
    {
        let mut pending = vec![(id, other_id)];
        while let Some((lhs, rhs)) = pending.pop() {
            let (Some(lhs), Some(rhs)) = (self.node(lhs), other.node(rhs)) else {
                return false;
            };
            if lhs.load != rhs.load || lhs.children.len() != rhs.children.len() {
                return false;
            }
            pending.extend(lhs.children.iter().copied().zip(rhs.children.iter().copied()));
        }
        true
    }

    /// Depth-first (pre-order) iteration starting at `start`
    pub fn iter_depth(&self, start: NodeId) -> DepthFirstIterator<'_, Load> {
        DepthFirstIterator::new(self, start)
    }

    /// Breadth-first iteration over all attached nodes
    pub fn iter_breadth(&self) -> BreadthFirstIterator<'_, Load> {
        BreadthFirstIterator::new(self, self.root)
    }

    /// Breadth-first iteration over the sub-tree starting at `start`
    pub fn iter_breadth_sub(&self, start: NodeId) -> BreadthFirstIterator<'_, Load> {
        BreadthFirstIterator::new(self, start)
    }

    /// Loads in depth-first (pre-order) order starting at `start`
    pub fn depth_first(&self, start: NodeId) -> Vec<&Load> {
        self.iter_depth(start).map(|node| node.get()).collect_vec()
    }

    /// Loads in breadth-first order starting at the root
    pub fn breadth_first(&self) -> Vec<&Load> {
        self.iter_breadth().map(|node| node.get()).collect_vec()
    }
}

impl<Load> PartialEq for Tree<Load>
where
    Load: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root -> {a, b}, a -> {c, d}
    fn sample() -> (Tree<char>, [NodeId; 5]) {
        let mut tree = Tree::new('r');
        let r = tree.root();
        let a = tree.add_child_value(r, 'a').unwrap();
        let b = tree.add_child_value(r, 'b').unwrap();
        let c = tree.add_child_value(a, 'c').unwrap();
        let d = tree.add_child_value(a, 'd').unwrap();
        (tree, [r, a, b, c, d])
    }

    #[test_log::test]
    fn test_adding_sets_parent_links() {
        let (tree, [r, a, b, c, d]) = sample();

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.children(r).unwrap(), &[a, b]);
        assert_eq!(tree.children(a).unwrap(), &[c, d]);
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(r), None);
        assert_eq!(tree.depth(d), Some(2));
        assert_eq!(tree.ancestors(d).collect_vec(), &[a, r]);
        assert!(tree.is_attached(d));
        assert!(tree.root_node().get() == &'r');
    }

    #[test_log::test]
    fn test_attaching_twice_is_refused() {
        let (mut tree, [r, a, b, c, _]) = sample();

        assert_eq!(tree.add_child(b, c), Err(ArboretumError::AlreadyAttached(c)));
        assert_eq!(tree.add_child(a, r), Err(ArboretumError::RootNotAttachable(r)));
        // Nothing changed
        assert_eq!(tree.children(a).unwrap().len(), 2);
        assert!(tree.children(b).unwrap().is_empty());

        // After removal the node can be moved
        assert_eq!(tree.remove_child(r, c), Some(c));
        tree.add_child(b, c).unwrap();
        assert_eq!(tree.parent(c), Some(b));
        assert_eq!(tree.depth_first(r), vec![&'r', &'a', &'d', &'b', &'c']);
    }

    #[test_log::test]
    fn test_cycles_are_refused() {
        let mut tree = Tree::new(0);
        let top = tree.create_node(1);
        let below = tree.add_child_value(top, 2).unwrap();

        assert_eq!(
            tree.add_child(below, top),
            Err(ArboretumError::WouldCycle { parent: below, child: top })
        );
        assert_eq!(
            tree.add_child(top, top),
            Err(ArboretumError::WouldCycle { parent: top, child: top })
        );
        assert!(!tree.is_attached(below));
        tree.add_child(tree.root(), top).unwrap();
        assert!(tree.is_attached(below));
    }

    #[test_log::test]
    fn test_add_children_is_all_or_nothing() {
        let (mut tree, [_, _, b, c, _]) = sample();
        let x = tree.create_node('x');
        let y = tree.create_node('y');

        assert_eq!(tree.add_children(b, [x, c, y]), Err(ArboretumError::AlreadyAttached(c)));
        assert_eq!(tree.add_children(b, [x, x]), Err(ArboretumError::DuplicateChild(x)));
        assert!(tree.children(b).unwrap().is_empty());
        assert_eq!(tree.parent(x), None);

        tree.add_children(b, [y, x]).unwrap();
        assert_eq!(tree.children(b).unwrap(), &[y, x]);
        assert_eq!(tree.breadth_first(), vec![&'r', &'a', &'b', &'c', &'d', &'y', &'x']);
        assert_eq!(tree.add_child_value(NodeId(99), 'z'), Err(ArboretumError::UnknownNode(NodeId(99))));
        assert_eq!(tree.node_count(), 7);
    }

    #[test_log::test]
    fn test_removal_uses_identity() {
        // Two structurally equal leaves 'c' below different parents
        let (mut tree, [r, a, b, c, _]) = sample();
        let other_c = tree.add_child_value(b, 'c').unwrap();

        // `c` is not below `b`, so nothing happens
        assert_eq!(tree.remove_child(b, c), None);
        assert_eq!(tree.children(b).unwrap(), &[other_c]);

        // Deep removal from the root detaches exactly the requested node
        assert_eq!(tree.remove_child(r, other_c), Some(other_c));
        assert_eq!(tree.children(a).unwrap().len(), 2);
        assert!(tree.children(b).unwrap().is_empty());
        assert!(!tree.is_attached(other_c));

        // A node cannot remove itself, a detached node is gone for good
        assert_eq!(tree.remove_child(a, a), None);
        assert_eq!(tree.remove_child(r, other_c), None);
    }

    #[test_log::test]
    fn test_prune_frees_subtree() {
        let (mut tree, [r, a, _, c, _]) = sample();
        let loads = tree.prune(r, a).unwrap();
        assert_eq!(loads, &['a', 'c', 'd']);
        assert_eq!(tree.node_count(), 2);
        assert!(tree.node(c).is_none());
        assert_eq!(tree.add_child(r, a), Err(ArboretumError::UnknownNode(a)));
        // ids are not recycled
        let fresh = tree.add_child_value(r, 'n').unwrap();
        assert_ne!(fresh, a);
        assert_eq!(tree.depth_first(r), vec![&'r', &'b', &'n']);
    }

    #[test]
    fn test_find_variants() {
        let (mut tree, [r, a, b, c, d]) = sample();
        let second_c = tree.add_child_value(b, 'c').unwrap();

        assert_eq!(tree.find(r, &'c'), Some(c));
        assert_eq!(tree.find(b, &'c'), Some(second_c));
        assert_eq!(tree.find(r, &'q'), None);
        assert_eq!(tree.find_by(r, |load| ('d'..='q').contains(load)), Some(d));
        assert!(tree.contains(a, d));
        assert!(!tree.contains(b, d));

        // a -> {c, d} as a pattern
        let mut pattern = Tree::new('a');
        let p = pattern.root();
        pattern.add_child_value(p, 'c').unwrap();
        pattern.add_child_value(p, 'd').unwrap();
        assert_eq!(tree.find_matching(r, &pattern, p), Some(a));
        assert_eq!(tree.find_matching(b, &pattern, p), None);
    }

    #[test]
    fn test_get_mut_changes_load() {
        let (mut tree, [_, a, ..]) = sample();
        *tree.get_mut(a).unwrap() = 'A';
        assert_eq!(tree.get(a), Some(&'A'));
        assert!(tree.get_mut(NodeId(42)).is_none());
    }
}
