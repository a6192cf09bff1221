//! Run reports for machine-readable output

use crate::life::Life;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Per-generation counters sampled during a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSample {
    pub generation: u64,
    pub population: usize,
}

/// Summary of one simulation run, serialized as JSON for `--format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub rows: usize,
    pub cols: usize,
    pub rule: String,
    pub samples: Vec<GenerationSample>,
}

impl RunReport {
    pub fn new(life: &Life) -> Self {
        Self {
            rows: life.rows(),
            cols: life.cols(),
            rule: life.rule().to_string(),
            samples: Vec::new(),
        }
    }

    /// Record the world's current counters
    pub fn sample(&mut self, life: &Life) {
        self.samples.push(GenerationSample {
            generation: life.generation(),
            population: life.population(),
        });
    }

    pub fn final_population(&self) -> Option<usize> {
        self.samples.last().map(|sample| sample.population)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }
}
