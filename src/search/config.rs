use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::search::constants::{
    DEFAULT_ELITE_SIZE, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
};

/// Parameters of one search run.
///
/// Loadable from JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Candidates per generation. Must exceed `elite_size`.
    pub population_size: usize,

    /// Number of generations to run. 0 evaluates the initial population only.
    pub generation_count: usize,

    /// Per-meal, per-generation mutation probability in [0, 1].
    pub mutation_rate: f64,

    /// Top menus copied unchanged into the next generation.
    pub elite_size: usize,

    /// Evaluate fitness on the rayon thread pool.
    pub parallel: bool,

    /// Seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Upper bound on foods per meal for the add mutation. `None` = unbounded.
    pub max_foods_per_meal: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generation_count: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            elite_size: DEFAULT_ELITE_SIZE,
            parallel: true,
            seed: None,
            max_foods_per_meal: None,
        }
    }
}

impl SearchConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_foods_per_meal(mut self, cap: usize) -> Self {
        self.max_foods_per_meal = Some(cap);
        self
    }

    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Check the parameter combination before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.elite_size >= self.population_size {
            return Err(NutriError::Configuration(format!(
                "elite_size ({}) must be smaller than population_size ({})",
                self.elite_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(NutriError::Configuration(format!(
                "mutation_rate must be within [0, 1] (got {})",
                self.mutation_rate
            )));
        }
        if self.max_foods_per_meal == Some(0) {
            return Err(NutriError::Configuration(
                "max_foods_per_meal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
