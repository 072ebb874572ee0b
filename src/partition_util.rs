use crate::{Color, Graph, GraphError, NodeId, RandomSource};
use std::collections::VecDeque;
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum InitialPartitioningMethod {
    /// Vertices are initialized to partitions based on their index in the graph (idx % partitions).
    RoundRobin,
    /// Vertices are initialized to random partitions.
    Random,
    /// Consecutive runs of vertex ids share a partition.
    Batch,
    /// Vertex patches get initialized based on locality using breadth first search.
    Bfs,
}

impl fmt::Display for InitialPartitioningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RoundRobin => "ROUND_ROBIN",
            Self::Random => "RANDOM",
            Self::Batch => "BATCH",
            Self::Bfs => "BFS",
        })
    }
}

impl Graph {
    /// Sets every node's current and initial color.
    pub fn assign_colors(&mut self, colors: Vec<Color>) -> Result<(), GraphError> {
        if colors.len() != self.vertices.len() {
            return Err(GraphError::ColorCountMismatch {
                expected: self.vertices.len(),
                actual: colors.len(),
            });
        }
        for (v, color) in self.vertices.iter_mut().zip(colors) {
            v.color = color;
            v.initial_color = color;
        }
        Ok(())
    }

    /// Colors the graph with `partitions` colors before the simulation starts.
    pub fn partition_initial(
        &mut self,
        method: InitialPartitioningMethod,
        rng: &mut RandomSource,
        partitions: u32,
    ) -> Result<(), GraphError> {
        if partitions == 0 {
            return Err(GraphError::NoPartitions);
        }
        let n = self.vertices.len();

        let colors = match method {
            InitialPartitioningMethod::RoundRobin => {
                (0..n).map(|i| i as Color % partitions).collect()
            }
            InitialPartitioningMethod::Random => {
                (0..n).map(|_| rng.next_int(partitions)).collect()
            }
            InitialPartitioningMethod::Batch => {
                let batch = divide_round_up(n as u32, partitions).max(1);
                (0..n).map(|i| i as Color / batch).collect()
            }
            InitialPartitioningMethod::Bfs => self.bfs_colors(partitions),
        };
        self.assign_colors(colors)
    }

    fn bfs_colors(&self, partitions: u32) -> Vec<Color> {
        const UNSET: Color = Color::MAX;

        let mut colors = vec![UNSET; self.vertices.len()];
        let target_size = divide_round_up(self.vertices.len() as u32, partitions);

        let mut color = 0;
        let mut partition_size = 0;
        let mut queue = VecDeque::new();

        while let Some(start) = colors.iter().position(|&c| c == UNSET) {
            queue.clear();
            queue.push_back(start as NodeId);

            while let Some(vx) = queue.pop_front() {
                if colors[vx as usize] != UNSET {
                    continue;
                }
                colors[vx as usize] = color;
                partition_size += 1;
                if partition_size >= target_size {
                    color = (color + 1).min(partitions - 1);
                    partition_size = 0;
                    break;
                }

                for &n in self.vertices[vx as usize].neighbours.iter() {
                    if colors[n as usize] == UNSET {
                        queue.push_back(n);
                    }
                }
            }
        }
        log::trace!("bfs partitions {}", color + 1);
        colors
    }

    /// Exchanges the colors of two nodes. Returns `false` without touching anything
    /// if they already share a color.
    pub(crate) fn swap_colors(&mut self, va: NodeId, vb: NodeId) -> bool {
        let a = self.vertices[va as usize].color;
        let b = self.vertices[vb as usize].color;
        if a == b {
            return false;
        }
        self.vertices[va as usize].color = b;
        self.vertices[vb as usize].color = a;
        true
    }
}

fn divide_round_up(n: u32, d: u32) -> u32 {
    n.div_ceil(d)
}
