use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::error::TaskError;
use crate::task::delay::{DelaySource, RandomDelay};
use crate::task::Task;

/// Simulated fetch that resolves with its label in upper case.
#[derive(Clone)]
pub struct FakeTask {
    pub label: String,
    delay: Arc<dyn DelaySource>,
}

impl FakeTask {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            delay: Arc::new(RandomDelay::default()),
        }
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelaySource>) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Task for FakeTask {
    async fn execute(&self) -> Result<String, TaskError> {
        let delay = self.delay.next_delay();
        tokio::time::sleep(delay).await;
        info!("Resolving {} after {}ms", self.label, delay.as_millis());
        Ok(self.label.to_uppercase())
    }
}

/// Simulated fetch that fails with its label in lower case.
#[derive(Clone)]
pub struct FakeFailingTask {
    pub label: String,
    delay: Arc<dyn DelaySource>,
}

impl FakeFailingTask {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            delay: Arc::new(RandomDelay::default()),
        }
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelaySource>) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Task for FakeFailingTask {
    async fn execute(&self) -> Result<String, TaskError> {
        let delay = self.delay.next_delay();
        tokio::time::sleep(delay).await;
        info!("Rejecting {} after {}ms", self.label, delay.as_millis());
        Err(TaskError::new(self.label.to_lowercase()))
    }
}
