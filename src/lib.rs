// Graph partitioning using simulated annealing based on Ja-be-Ja:
// https://www.diva-portal.org/smash/get/diva2:1043244/FULLTEXT01.pdf

mod annealing;
mod config;
mod driver;
mod error;
mod metrics;
mod partition_util;
mod random;
mod report;
mod sampler;
mod selector;

pub use annealing::{Annealer, EXPONENTIAL_MIN_TEMPERATURE, RESTART_PERIOD};
pub use config::{AnnealingPolicy, JabejaConfig, NodeSelection};
pub use driver::{Jabeja, SamplingStats};
pub use error::{ConfigError, GraphError, ReportError};
pub use metrics::RoundMetrics;
pub use partition_util::InitialPartitioningMethod;
pub use random::RandomSource;
pub use report::{result_file_name, Reporter, TabularReporter};

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dense node index into the graph arena.
pub type NodeId = u32;
/// Partition label of a node.
pub type Color = u32;

#[derive(Clone, Debug)]
pub struct Node {
    neighbours: Vec<NodeId>,
    color: Color,
    initial_color: Color,
}

impl Node {
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The color assigned before the simulation started.
    pub fn initial_color(&self) -> Color {
        self.initial_color
    }
}

/// Undirected, simple graph stored as an arena of nodes. Node `i` lives at index `i`.
///
/// The topology is fixed at construction; only node colors change afterwards.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Node>,
}

impl Graph {
    /// Builds a graph from per-node neighbour lists. Every node starts with color 0.
    ///
    /// The lists must describe a simple undirected graph: every neighbour in range,
    /// no self-loops, no repeated neighbours, and `b` in `a`'s list iff `a` is in `b`'s.
    pub fn from_adjacency(adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        let mut directed = HashSet::new();

        for (node, neighbours) in adjacency.iter().enumerate() {
            let node = node as NodeId;
            for &neighbour in neighbours {
                if neighbour as usize >= node_count {
                    return Err(GraphError::NeighbourOutOfRange {
                        node,
                        neighbour,
                        node_count,
                    });
                }
                if neighbour == node {
                    return Err(GraphError::SelfLoop(node));
                }
                if !directed.insert((node, neighbour)) {
                    return Err(GraphError::DuplicateEdge { node, neighbour });
                }
            }
        }

        for &(node, neighbour) in directed.iter() {
            if !directed.contains(&(neighbour, node)) {
                return Err(GraphError::AsymmetricEdge { node, neighbour });
            }
        }

        Ok(Graph {
            vertices: adjacency
                .into_iter()
                .map(|neighbours| Node {
                    neighbours,
                    color: 0,
                    initial_color: 0,
                })
                .collect(),
        })
    }

    /// Builds a graph with `node_count` nodes from a list of undirected edges.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, GraphError> {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            if a as usize >= node_count || b as usize >= node_count {
                return Err(GraphError::NeighbourOutOfRange {
                    node: a,
                    neighbour: b,
                    node_count,
                });
            }
            adjacency[a as usize].push(b);
            if a != b {
                adjacency[b as usize].push(a);
            }
        }
        Self::from_adjacency(adjacency)
    }

    /// Reads an unweighted graph in METIS format.
    ///
    /// The header holds the vertex and edge counts, followed by one line per vertex
    /// listing its 1-based neighbours. Lines starting with `%` or `#` are comments.
    pub fn deserialize_metis<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
        Self::read_metis(BufReader::new(file))
            .with_context(|| format!("could not parse METIS graph {}", path.display()))
    }

    pub fn read_metis<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader
            .lines()
            .filter(|l| !matches!(l, Ok(l) if l.starts_with('%') || l.starts_with('#')));

        // Parse the header line
        let header = lines.next().context("could not get header line")??;
        let header_parts = header.split_ascii_whitespace().collect::<Vec<_>>();
        let vertex_count = header_parts
            .first()
            .context("header is empty")?
            .parse::<usize>()
            .context("could not parse vertex count")?;
        let edge_count = header_parts
            .get(1)
            .context("header has no edge count")?
            .parse::<usize>()
            .context("could not parse edge count")?;
        if let Some(fmt) = header_parts.get(2) {
            if fmt.chars().any(|c| c != '0') {
                bail!("weighted METIS format {fmt} is not supported");
            }
        }

        // Parse the edges. The header is untrusted, so cap the up-front allocation.
        let mut adjacency = Vec::with_capacity(vertex_count.min(1 << 20));
        for line in lines {
            let line = line?;
            if adjacency.len() == vertex_count {
                if line.trim().is_empty() {
                    continue;
                }
                bail!("more than {vertex_count} vertex lines");
            }
            let src = adjacency.len() + 1;
            let mut neighbours = Vec::new();
            for dst_str in line.split_ascii_whitespace() {
                let dst = dst_str
                    .parse::<NodeId>()
                    .with_context(|| format!("vertex {src}: bad neighbour {dst_str:?}"))?;
                if dst == 0 {
                    bail!("vertex {src}: neighbour ids are 1-based");
                }
                neighbours.push(dst - 1);
            }
            adjacency.push(neighbours);
        }
        if adjacency.len() < vertex_count {
            bail!("expected {vertex_count} vertex lines, found {}", adjacency.len());
        }

        let graph = Self::from_adjacency(adjacency)?;
        if graph.edge_count() != edge_count {
            bail!("header declares {edge_count} edges, found {}", graph.edge_count());
        }
        log::debug!("read graph with {vertex_count} vertices and {edge_count} edges");
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbours.len()).sum::<usize>() / 2
    }

    pub fn node(&self, vx: NodeId) -> &Node {
        &self.vertices[vx as usize]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.vertices.iter()
    }

    pub fn color(&self, vx: NodeId) -> Color {
        self.vertices[vx as usize].color
    }

    pub fn neighbours(&self, vx: NodeId) -> &[NodeId] {
        &self.vertices[vx as usize].neighbours
    }

    /// Returns the number of neighbours having the given color.
    pub fn get_degree(&self, vx: NodeId, color: Color) -> u32 {
        self.vertices[vx as usize]
            .neighbours
            .iter()
            .filter(|&&n| self.vertices[n as usize].color == color)
            .count() as u32
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 0-1-2-3-0 colored [0, 1, 0, 1].
    pub(crate) fn alternating_ring() -> Graph {
        let mut graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        graph.assign_colors(vec![0, 1, 0, 1]).unwrap();
        graph
    }

    #[test]
    fn from_edges_is_symmetric() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.neighbours(0), &[1]);
        assert_eq!(graph.neighbours(1), &[0, 2]);
        assert_eq!(graph.neighbours(2), &[1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn rejects_bad_adjacency() {
        assert_eq!(
            Graph::from_adjacency(vec![vec![1], vec![]]).unwrap_err(),
            GraphError::AsymmetricEdge {
                node: 0,
                neighbour: 1
            }
        );
        assert_eq!(
            Graph::from_adjacency(vec![vec![0]]).unwrap_err(),
            GraphError::SelfLoop(0)
        );
        assert_eq!(
            Graph::from_adjacency(vec![vec![1, 1], vec![0, 0]]).unwrap_err(),
            GraphError::DuplicateEdge {
                node: 0,
                neighbour: 1
            }
        );
        assert!(matches!(
            Graph::from_adjacency(vec![vec![5]]),
            Err(GraphError::NeighbourOutOfRange { .. })
        ));
    }

    #[test]
    fn degree_counts_neighbours_by_color() {
        let graph = alternating_ring();
        assert_eq!(graph.get_degree(0, 0), 0);
        assert_eq!(graph.get_degree(0, 1), 2);
        assert_eq!(graph.get_degree(1, 0), 2);
    }

    #[test]
    fn reads_metis() {
        let input = "% a triangle and an isolated vertex\n4 3\n2 3\n1 3\n1 2\n\n";
        let graph = Graph::read_metis(input.as_bytes()).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbours(2), &[0, 1]);
        assert!(graph.neighbours(3).is_empty());
    }

    #[test]
    fn metis_rejects_wrong_edge_count() {
        let input = "3 5\n2\n1 3\n2\n";
        assert!(Graph::read_metis(input.as_bytes()).is_err());
    }

    #[test]
    fn metis_huge_header_is_an_error() {
        let input = "18446744073709551615 0\n";
        assert!(Graph::read_metis(input.as_bytes()).is_err());
    }

    #[test]
    fn metis_rejects_weights() {
        let input = "2 1 1\n2 4\n1 4\n";
        assert!(Graph::read_metis(input.as_bytes()).is_err());
    }
}
