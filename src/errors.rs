//! Provides the error type used by the mutating tree operations.
//!
//! Queries never fail: a search that finds nothing returns `None`, and so does
//! extracting from an empty heap.

use crate::arena::NodeId;
use thiserror::Error;

/// The error type of this crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArboretumError {
    #[error("Node not in tree: {0}")]
    UnknownNode(NodeId),
    #[error("Node {0} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("The root node {0} cannot become a child")]
    RootNotAttachable(NodeId),
    #[error("Attaching {child} below {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
    #[error("Node {0} is listed twice")]
    DuplicateChild(NodeId),
}
