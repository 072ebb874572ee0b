use crate::{AnnealingPolicy, JabejaConfig, RandomSource};

/// Rounds between temperature restarts when restarting is enabled.
pub const RESTART_PERIOD: u32 = 400;

/// Temperature floor of exponential annealing.
pub const EXPONENTIAL_MIN_TEMPERATURE: f64 = 0.00001;

/// Owns the temperature of a run: decays it once per round and decides which
/// candidate swaps pass at the current temperature.
#[derive(Clone, Debug)]
pub struct Annealer {
    policy: AnnealingPolicy,
    start: f64,
    delta: f64,
    restart: bool,
    temperature: f64,
}

impl Annealer {
    pub fn new(config: &JabejaConfig) -> Self {
        let mut annealer = Self {
            policy: config.annealing,
            start: config.temperature_start,
            delta: config.temperature_delta,
            restart: config.restart,
            temperature: 0.0,
        };
        annealer.reset();
        annealer
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The temperature never drops below this value.
    pub fn min_temperature(&self) -> f64 {
        match self.policy {
            AnnealingPolicy::Linear => 1.0,
            AnnealingPolicy::Exponential => EXPONENTIAL_MIN_TEMPERATURE,
        }
    }

    /// Applies one round of cooling.
    pub fn cool_down(&mut self) {
        self.temperature = match self.policy {
            AnnealingPolicy::Linear => self.temperature - self.delta,
            AnnealingPolicy::Exponential => self.temperature * self.delta,
        }
        .max(self.min_temperature());
    }

    /// Whether the temperature is reset before cooling at the end of `round`.
    pub fn should_restart(&self, round: u32) -> bool {
        self.restart && round % RESTART_PERIOD == 0
    }

    /// Puts the temperature back to its start value.
    pub fn reset(&mut self) {
        self.temperature = self.start.max(self.min_temperature());
    }

    /// Decides whether a candidate with swap costs `old_cost` / `new_cost` replaces
    /// the best candidate so far, whose new cost is `best`.
    ///
    /// Exponential annealing consumes exactly one draw from `rng` per call.
    pub fn accepts(&self, rng: &mut RandomSource, old_cost: f64, new_cost: f64, best: f64) -> bool {
        match self.policy {
            // Higher temperatures make changes more likely.
            AnnealingPolicy::Linear => new_cost * self.temperature > old_cost && new_cost > best,
            AnnealingPolicy::Exponential => {
                let draw = rng.next_unit();
                let probability = ((new_cost - old_cost) / self.temperature).exp();
                draw < probability && new_cost != old_cost && new_cost > best
            }
        }
    }
}
