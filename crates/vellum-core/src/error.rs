//! Error types for tree construction and mutation.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised by [`Tree`](crate::tree::Tree) operations.
///
/// Every failing operation leaves the tree unmodified.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error(
        "cannot attach node {other} below node {parent}: {other} is an ancestor of {parent}, \
         attaching it would create a cycle"
    )]
    WouldCycle { parent: NodeId, other: NodeId },

    #[error(
        "cannot insert node {other} below node {parent}: \
         {other} is already a descendant of {parent}"
    )]
    AlreadyDescendant { parent: NodeId, other: NodeId },

    #[error("node {0} holds text and cannot hold child elements")]
    TextNodeChildren(NodeId),

    #[error("node {0} has child elements and cannot hold text")]
    ContainerText(NodeId),

    #[error("polyline data has uneven length: {x} x values, {y} y values")]
    PolylineLengthMismatch { x: usize, y: usize },

    #[error("polyline data is empty")]
    EmptyPolyline,

    #[error("polyline coordinate {index} is not a finite number")]
    NonFiniteCoordinate { index: usize },
}
