use crate::ConfigError;
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum NodeSelection {
    /// Just direct neighbours of vertices are selected as candidates for swapping.
    Local,
    /// Candidates are always sampled uniformly from the whole graph.
    Random,
    /// If direct neighbours cannot improve the partitioning, a set number of random vertices is sampled.
    Hybrid,
}

impl NodeSelection {
    pub fn samples_neighbours(self) -> bool {
        matches!(self, Self::Local | Self::Hybrid)
    }

    pub fn samples_uniformly(self) -> bool {
        matches!(self, Self::Random | Self::Hybrid)
    }
}

impl fmt::Display for NodeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "LOCAL",
            Self::Random => "RANDOM",
            Self::Hybrid => "HYBRID",
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum AnnealingPolicy {
    /// `T -= delta` every round, never below 1. Swaps pass if `new * T > old`.
    Linear,
    /// `T *= delta` every round, never below a small epsilon. Swaps pass with
    /// probability `exp((new - old) / T)`.
    Exponential,
}

impl fmt::Display for AnnealingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "LINEAR",
            Self::Exponential => "EXPONENTIAL",
        })
    }
}

#[derive(Clone, Debug)]
pub struct JabejaConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// How many full passes over all vertices are run.
    pub rounds: u32,
    /// The initial temperature for the simulated annealing.
    pub temperature_start: f64,
    /// How much the temperature decreases every round. Subtracted for linear annealing,
    /// multiplied in for exponential annealing.
    pub temperature_delta: f64,
    /// How temperature decays and how it gates swaps.
    pub annealing: AnnealingPolicy,
    /// Reset the temperature to its start value every few hundred rounds.
    pub restart: bool,
    /// The alpha parameter used to decide if a swap of two vertices is beneficial (see paper).
    pub alpha: f64,
    /// How many random neighbours should be sampled for each vertex.
    pub neighbour_sample_size: u32,
    /// How many random vertices should be sampled when uniform sampling is used.
    pub random_sample_size: u32,
    /// The way that swap candidates are selected.
    pub neighbour_selection: NodeSelection,
}

impl Default for JabejaConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            rounds: 1000,
            temperature_start: 2.0,
            temperature_delta: 0.003,
            annealing: AnnealingPolicy::Linear,
            restart: false,
            alpha: 2.0,
            neighbour_sample_size: 3,
            random_sample_size: 6,
            neighbour_selection: NodeSelection::Hybrid,
        }
    }
}

impl JabejaConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_temperature(mut self, start: f64, delta: f64) -> Self {
        self.temperature_start = start;
        self.temperature_delta = delta;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingPolicy) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_sample_sizes(mut self, neighbours: u32, random: u32) -> Self {
        self.neighbour_sample_size = neighbours;
        self.random_sample_size = random;
        self
    }

    pub fn with_selection(mut self, selection: NodeSelection) -> Self {
        self.neighbour_selection = selection;
        self
    }

    /// Checks the configuration against a graph with `node_count` nodes.
    pub fn validate(&self, node_count: usize) -> Result<(), ConfigError> {
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(ConfigError::NonPositiveAlpha(self.alpha));
        }
        if self.temperature_start.is_nan() || self.temperature_start <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(self.temperature_start));
        }
        let delta = self.temperature_delta;
        match self.annealing {
            AnnealingPolicy::Linear => {
                if delta.is_nan() || delta < 0.0 {
                    return Err(ConfigError::BadLinearDelta(delta));
                }
            }
            AnnealingPolicy::Exponential => {
                if delta.is_nan() || delta <= 0.0 || delta > 1.0 {
                    return Err(ConfigError::BadExponentialDelta(delta));
                }
            }
        }
        let available = node_count.saturating_sub(1);
        if self.neighbour_selection.samples_uniformly()
            && self.random_sample_size as usize > available
        {
            return Err(ConfigError::UniformSampleTooLarge {
                policy: self.neighbour_selection,
                requested: self.random_sample_size,
                available,
            });
        }
        Ok(())
    }
}
