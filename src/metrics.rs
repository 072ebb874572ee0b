use crate::Graph;

/// Summary emitted after every round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundMetrics {
    /// Zero-based index of the round that just completed.
    pub round: u32,
    pub edge_cut: u32,
    /// Swaps since the start of the run.
    pub swaps: u64,
    pub migrations: u32,
}

impl Graph {
    /// Number of undirected edges whose endpoints have different colors.
    pub fn calculate_edge_cut(&self) -> u32 {
        let mut edge_cut = 0;
        for v in self.vertices.iter() {
            for &n in v.neighbours.iter() {
                if self.vertices[n as usize].color != v.color {
                    edge_cut += 1;
                }
            }
        }
        edge_cut / 2
    }

    /// Number of nodes whose color differs from their initial color.
    pub fn count_migrations(&self) -> u32 {
        self.vertices
            .iter()
            .filter(|v| v.color != v.initial_color)
            .count() as u32
    }

    /// Node count per color, indexed by color.
    pub fn partition_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for v in self.vertices.iter() {
            let color = v.color as usize;
            if sizes.len() <= color {
                sizes.resize(color + 1, 0);
            }
            sizes[color] += 1;
        }
        sizes
    }
}
