use serde::Serialize;
use thiserror::Error;

/// The failure produced by a single task.
///
/// There is only one kind of task failure; it carries a free-form payload
/// which is also what it displays as.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("{payload}")]
pub struct TaskError {
    payload: String,
}

impl TaskError {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl From<&str> for TaskError {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl From<String> for TaskError {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

/// Errors returned by the combinators and the run options.
#[derive(Debug, Error)]
pub enum Error {
    #[error("task rejected: {0}")]
    Task(#[from] TaskError),

    #[error("task {index} did not run to completion: {message}")]
    Join { index: usize, message: String },

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// The task error behind a rejection, if this is one.
    pub fn task_error(&self) -> Option<&TaskError> {
        match self {
            Error::Task(e) => Some(e),
            _ => None,
        }
    }
}
