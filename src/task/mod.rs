use async_trait::async_trait;
use std::sync::Arc;

use crate::error::TaskError;

pub mod delay;
pub mod fake_task;


pub use delay::{DelaySource, FixedDelay, RandomDelay, SequenceDelay};
pub use fake_task::{FakeFailingTask, FakeTask};

/// A re-invokable unit of asynchronous work.
///
/// Every call to `execute` starts a fresh piece of work, so a single value
/// acts as a task factory for the combinators.
#[async_trait]
pub trait Task: Send + Sync {
    async fn execute(&self) -> Result<String, TaskError>;
}

/// Shared handle to a task, as consumed by the combinators.
pub type TaskFactory = Arc<dyn Task>;
