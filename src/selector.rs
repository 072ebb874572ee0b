use crate::{Annealer, Graph, NodeId, RandomSource};

impl Graph {
    /// Picks the candidate whose color swap with `vx` gives the highest post-swap
    /// cost `new = d(vx, c.color)^alpha + d(c, vx.color)^alpha`, among the candidates
    /// the annealer accepts. Candidates sharing `vx`'s color are skipped.
    ///
    /// All candidates are scanned; on ties the earliest one wins.
    pub fn select_partner(
        &self,
        annealer: &Annealer,
        alpha: f64,
        rng: &mut RandomSource,
        vx: NodeId,
        candidates: &[NodeId],
    ) -> Option<NodeId> {
        let v_color = self.color(vx);
        let v_old_degree = self.get_degree(vx, v_color);

        let mut max_degree_sum = 0.0;
        let mut max_degree_candidate = None;

        for &cx in candidates.iter() {
            let c_color = self.color(cx);
            if c_color == v_color {
                continue;
            }
            let c_old_degree = self.get_degree(cx, c_color);

            let v_new_degree = self.get_degree(vx, c_color);
            let c_new_degree = self.get_degree(cx, v_color);

            let old_degree_sum =
                (v_old_degree as f64).powf(alpha) + (c_old_degree as f64).powf(alpha);
            let new_degree_sum =
                (v_new_degree as f64).powf(alpha) + (c_new_degree as f64).powf(alpha);

            if annealer.accepts(rng, old_degree_sum, new_degree_sum, max_degree_sum) {
                max_degree_sum = new_degree_sum;
                max_degree_candidate = Some(cx);
            }
        }
        max_degree_candidate
    }
}
