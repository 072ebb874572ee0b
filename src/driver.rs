use crate::{
    Annealer, ConfigError, Graph, JabejaConfig, NodeId, RandomSource, ReportError, Reporter,
    RoundMetrics,
};

/// How often each sampling path was taken during a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplingStats {
    pub neighbour_samples: u64,
    pub uniform_samples: u64,
}

/// A Ja-be-Ja run over a colored graph.
///
/// Owns the graph, the random stream and the temperature. Nodes are visited
/// sequentially in id order every round, so a fixed seed reproduces a run exactly.
pub struct Jabeja {
    graph: Graph,
    config: JabejaConfig,
    annealer: Annealer,
    rng: RandomSource,
    round: u32,
    swaps: u64,
    stats: SamplingStats,
    candidate_buf: Vec<NodeId>,
}

impl Jabeja {
    /// Prepares a run. The graph must already carry its initial coloring.
    pub fn new(graph: Graph, config: JabejaConfig) -> Result<Self, ConfigError> {
        config.validate(graph.len())?;
        log::debug!(
            "starting {} selection with {:?} annealing on {} nodes, {} edges",
            config.neighbour_selection,
            config.annealing,
            graph.len(),
            graph.edge_count()
        );
        Ok(Self {
            annealer: Annealer::new(&config),
            rng: RandomSource::seeded(config.rng_seed),
            candidate_buf: Vec::with_capacity(
                config.neighbour_sample_size.max(config.random_sample_size) as usize,
            ),
            graph,
            config,
            round: 0,
            swaps: 0,
            stats: SamplingStats::default(),
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of completed rounds.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn temperature(&self) -> f64 {
        self.annealer.temperature()
    }

    pub fn stats(&self) -> SamplingStats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.round >= self.config.rounds
    }

    /// Runs the remaining rounds, handing each round's metrics to `reporter`.
    ///
    /// A reporter error stops the run after the failing round. The simulation
    /// state is kept, so calling `run` again continues with the next round.
    pub fn run<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Result<(), ReportError> {
        while !self.is_finished() {
            let metrics = self.step();
            reporter.report(&metrics)?;
        }
        Ok(())
    }

    /// Runs one round: every node attempts one swap, then the temperature is
    /// restarted if due and cooled.
    ///
    /// Does not check the configured round count; only [`Jabeja::run`] stops there.
    pub fn step(&mut self) -> RoundMetrics {
        for vx in 0..self.graph.len() as NodeId {
            self.sample_and_swap(vx);
        }

        if self.annealer.should_restart(self.round) {
            log::debug!("round {}: restarting temperature", self.round);
            self.annealer.reset();
        }
        self.annealer.cool_down();

        let metrics = RoundMetrics {
            round: self.round,
            edge_cut: self.graph.calculate_edge_cut(),
            swaps: self.swaps,
            migrations: self.graph.count_migrations(),
        };
        log::info!(
            "round: {}, edge cut: {}, swaps: {}, migrations: {}",
            metrics.round,
            metrics.edge_cut,
            metrics.swaps,
            metrics.migrations
        );
        log::trace!("temperature: {}", self.annealer.temperature());

        self.round += 1;
        metrics
    }

    fn sample_and_swap(&mut self, vx: NodeId) {
        let selection = self.config.neighbour_selection;
        let mut partner = None;

        if selection.samples_neighbours() {
            self.graph.sample_neighbours(
                &mut self.rng,
                self.config.neighbour_sample_size,
                vx,
                &mut self.candidate_buf,
            );
            self.stats.neighbour_samples += 1;
            partner = self.graph.select_partner(
                &self.annealer,
                self.config.alpha,
                &mut self.rng,
                vx,
                &self.candidate_buf,
            );
        }

        if partner.is_none() && selection.samples_uniformly() {
            self.graph.sample_uniform(
                &mut self.rng,
                self.config.random_sample_size,
                vx,
                &mut self.candidate_buf,
            );
            self.stats.uniform_samples += 1;
            partner = self.graph.select_partner(
                &self.annealer,
                self.config.alpha,
                &mut self.rng,
                vx,
                &self.candidate_buf,
            );
        }

        if let Some(cx) = partner {
            if self.graph.swap_colors(vx, cx) {
                self.swaps += 1;
            }
        }
    }
}
