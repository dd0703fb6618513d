use std::sync::Arc;

use crate::task::{DelaySource, FakeFailingTask, FakeTask, RandomDelay, TaskFactory};

pub const DEFAULT_LABELS: [&str; 5] = ["Apple", "Orange", "Grape", "Banana", "Mango"];

/// A list of labels to fetch, optionally with one of them set up to fail.
#[derive(Clone)]
pub struct Scenario {
    labels: Vec<String>,
    failing_index: Option<usize>,
    delay: Arc<dyn DelaySource>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}

impl Scenario {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            failing_index: None,
            delay: Arc::new(RandomDelay::default()),
        }
    }

    pub fn with_failing_index(mut self, index: Option<usize>) -> Self {
        self.failing_index = index;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn DelaySource>) -> Self {
        self.delay = delay;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn failing_index(&self) -> Option<usize> {
        self.failing_index
    }

    /// One task per label, in label order. The task at the failing index,
    /// if any, rejects; every other task resolves.
    pub fn tasks(&self) -> Vec<TaskFactory> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| -> TaskFactory {
                if Some(index) == self.failing_index {
                    Arc::new(FakeFailingTask::new(label.as_str()).with_delay(self.delay.clone()))
                } else {
                    Arc::new(FakeTask::new(label.as_str()).with_delay(self.delay.clone()))
                }
            })
            .collect()
    }

    /// What the tasks resolve with when none of them fails.
    pub fn expected_values(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.to_uppercase()).collect()
    }
}
