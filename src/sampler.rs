use crate::{Graph, NodeId, RandomSource};

impl Graph {
    /// Fills `dst` with up to `n` distinct random neighbours of `vx`.
    /// If `vx` has no more than `n` neighbours, all of them are returned.
    pub fn sample_neighbours(
        &self,
        rng: &mut RandomSource,
        n: u32,
        vx: NodeId,
        dst: &mut Vec<NodeId>,
    ) {
        dst.clear();
        let neighbours = self.neighbours(vx);
        let edge_count = neighbours.len() as u32;

        // Less edges than requested. Return all neighbours.
        if edge_count <= n {
            dst.extend_from_slice(neighbours);
            return;
        }

        // Neighbour lists hold no duplicates, so distinct ids mean distinct picks.
        while dst.len() < n as usize {
            let picked = neighbours[rng.next_int(edge_count) as usize];
            if !dst.contains(&picked) {
                dst.push(picked);
            }
        }
    }

    /// Fills `dst` with `n` distinct random vertices of the graph, excluding `vx`.
    ///
    /// At most `self.len() - 1` vertices exist to pick from, so larger `n` is clamped.
    pub fn sample_uniform(
        &self,
        rng: &mut RandomSource,
        n: u32,
        vx: NodeId,
        dst: &mut Vec<NodeId>,
    ) {
        dst.clear();
        let n = (n as usize).min(self.len().saturating_sub(1));
        let vertex_count = self.len() as u32;
        while dst.len() < n {
            let r = rng.next_int(vertex_count);
            if r != vx && !dst.contains(&r) {
                dst.push(r);
            }
        }
    }
}
