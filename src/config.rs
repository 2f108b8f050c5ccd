//! Run configuration.
//!
//! Every field has a default, so a config file only needs to name what it overrides:
//!
//! ```json
//! { "population_size": 250, "speed": 10, "seed": 42 }
//! ```

use crate::{
    constants::{
        PIPEBIRD_HIDDEN_SIZE, PIPEBIRD_INPUT_SIZE, PIPEBIRD_MUTATION_RATE, PIPEBIRD_OUTPUT_SIZE,
        PIPEBIRD_POPULATION_SIZE,
    },
    error::{Error, Result},
    network::Topology,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub population_size: usize,
    /// Ticks simulated per rendered frame
    pub speed: usize,
    /// When off, birds only jump on manual input
    pub autonomous: bool,
    pub hidden_size: usize,
    pub mutation_rate: f64,
    /// Fixed seed for a reproducible run
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: PIPEBIRD_POPULATION_SIZE,
            speed: 1,
            autonomous: true,
            hidden_size: PIPEBIRD_HIDDEN_SIZE,
            mutation_rate: PIPEBIRD_MUTATION_RATE,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::config("population_size must be positive"));
        }
        if self.speed == 0 {
            return Err(Error::config("speed must be positive"));
        }
        if self.hidden_size == 0 {
            return Err(Error::config("hidden_size must be positive"));
        }
        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(Error::config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Network shape implied by the sensors, the jump output, and `hidden_size`
    pub fn topology(&self) -> Result<Topology> {
        Topology::new(PIPEBIRD_INPUT_SIZE, self.hidden_size, PIPEBIRD_OUTPUT_SIZE)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    pub fn to_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
