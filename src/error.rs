use crate::{NodeId, NodeSelection};
use thiserror::Error;

/// Rejected adjacency while building a [`Graph`](crate::Graph).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} lists neighbour {neighbour}, but the graph only has {node_count} nodes")]
    NeighbourOutOfRange {
        node: NodeId,
        neighbour: NodeId,
        node_count: usize,
    },
    #[error("node {0} lists itself as a neighbour")]
    SelfLoop(NodeId),
    #[error("node {node} lists neighbour {neighbour} more than once")]
    DuplicateEdge { node: NodeId, neighbour: NodeId },
    #[error("edge {node} -> {neighbour} has no matching edge {neighbour} -> {node}")]
    AsymmetricEdge { node: NodeId, neighbour: NodeId },
    #[error("expected {expected} colors, got {actual}")]
    ColorCountMismatch { expected: usize, actual: usize },
    #[error("cannot color a graph with zero partitions")]
    NoPartitions,
}

/// Configuration that cannot be run against a given graph. Detected once at setup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("alpha must be positive, got {0}")]
    NonPositiveAlpha(f64),
    #[error("initial temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),
    #[error("linear cooldown delta must be non-negative, got {0}")]
    BadLinearDelta(f64),
    #[error("exponential cooldown delta must be in (0, 1], got {0}")]
    BadExponentialDelta(f64),
    #[error(
        "{policy:?} selection samples {requested} random nodes, but only {available} other nodes exist"
    )]
    UniformSampleTooLarge {
        policy: NodeSelection,
        requested: u32,
        available: usize,
    },
}

/// Failure to persist a round summary.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create output directory {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write results")]
    Write(#[from] std::io::Error),
}
