//! # Async Combinators
//!
//! Five ways to combine asynchronous tasks with tokio, side by side:
//!
//! - [`all_parallel`]: start everything, fail on the first rejection
//! - [`all_settled`]: start everything, report how each task settled
//! - [`sequential_fold`]: one at a time, as an async fold
//! - [`sequential_recursive`]: one at a time, as a continuation over the index
//! - [`sequential_iterative`]: one at a time, with a plain loop
//!
//! Work is simulated by [`FakeTask`] and [`FakeFailingTask`], which settle
//! after a delay drawn from a [`DelaySource`].
//!
//! ## Example
//!
//! ```rust
//! use async_combinators::{all_settled, sequential_fold, FixedDelay, Scenario};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scenario = Scenario::default()
//!         .with_failing_index(Some(3))
//!         .with_delay(Arc::new(FixedDelay::zero()));
//!     let tasks = scenario.tasks();
//!
//!     let outcomes = all_settled(&tasks).await;
//!     assert!(outcomes[3].is_rejected());
//!
//!     match sequential_fold(&tasks).await {
//!         Ok(values) => println!("resolved {:?}", values),
//!         Err(e) => eprintln!("rejected: {}", e),
//!     }
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the MIT license. See the [LICENSE](LICENSE) file for details.

pub mod engine;
pub mod error;
pub mod options;
pub mod scenario;
pub mod task;

pub use engine::{
    all_parallel, all_settled, run, sequential_fold, sequential_iterative, sequential_recursive,
    Outcome, Report, SequenceState, Strategy,
};
pub use error::{Error, TaskError};
pub use options::RunOptions;
pub use scenario::Scenario;
pub use task::{
    DelaySource, FakeFailingTask, FakeTask, FixedDelay, RandomDelay, SequenceDelay, Task,
    TaskFactory,
};
