mod outcome;
mod parallel;
mod sequence_state;
mod sequential;
mod strategy;

pub use outcome::Outcome;
pub use parallel::{all_parallel, all_settled};
pub use sequence_state::SequenceState;
pub use sequential::{sequential_fold, sequential_iterative, sequential_recursive};
pub use strategy::{run, Report, Strategy};
