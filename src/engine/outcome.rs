use serde::Serialize;
use std::fmt;

use crate::error::TaskError;


/// Settlement of one task, as reported by `all_settled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Fulfilled { value: String },
    Rejected { reason: TaskError },
}

impl Outcome {
    pub fn from_result(result: Result<String, TaskError>) -> Self {
        match result {
            Ok(value) => Outcome::Fulfilled { value },
            Err(reason) => Outcome::Rejected { reason },
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Fulfilled { .. } => "fulfilled",
            Outcome::Rejected { .. } => "rejected",
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Outcome::Fulfilled { value } => Some(value),
            Outcome::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&TaskError> {
        match self {
            Outcome::Rejected { reason } => Some(reason),
            Outcome::Fulfilled { .. } => None,
        }
    }
}

impl From<Result<String, TaskError>> for Outcome {
    fn from(result: Result<String, TaskError>) -> Self {
        Outcome::from_result(result)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Fulfilled { value } => write!(f, "{}: {}", self.status(), value),
            Outcome::Rejected { reason } => write!(f, "{}: {}", self.status(), reason),
        }
    }
}
