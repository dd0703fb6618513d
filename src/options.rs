use std::sync::Arc;
use std::time::Duration;

use crate::engine::Strategy;
use crate::error::Error;
use crate::scenario::{Scenario, DEFAULT_LABELS};
use crate::task::delay::{RandomDelay, DEFAULT_MAX_DELAY};


#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Strategies to run, in order
    pub strategies: Vec<Strategy>,
    /// Index of the task that should reject, if any
    pub failing_index: Option<usize>,
    /// Upper bound of the simulated latency
    pub max_delay: Duration,
    /// Labels handed to the fake tasks
    pub labels: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            failing_index: None,
            max_delay: DEFAULT_MAX_DELAY,
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, value: Strategy) -> Self {
        self.strategies = vec![value];
        self
    }

    pub fn with_strategies(mut self, value: Vec<Strategy>) -> Self {
        self.strategies = value;
        self
    }

    pub fn with_failing_index(mut self, value: Option<usize>) -> Self {
        self.failing_index = value;
        self
    }

    pub fn with_max_delay(mut self, value: Duration) -> Self {
        self.max_delay = value;
        self
    }

    pub fn with_labels(mut self, value: Vec<String>) -> Self {
        self.labels = value;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.strategies.is_empty() {
            return Err(Error::InvalidOptions("no strategy selected".into()));
        }
        if let Some(index) = self.failing_index {
            if index >= self.labels.len() {
                return Err(Error::InvalidOptions(format!(
                    "failing index {} is out of range for {} label(s)",
                    index,
                    self.labels.len()
                )));
            }
        }
        Ok(())
    }

    /// Builds the scenario described by these options.
    pub fn scenario(&self) -> Result<Scenario, Error> {
        self.validate()?;
        Ok(Scenario::new(self.labels.iter().cloned())
            .with_failing_index(self.failing_index)
            .with_delay(Arc::new(RandomDelay::new(self.max_delay))))
    }
}
