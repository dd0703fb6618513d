use log::info;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::outcome::Outcome;
use super::parallel::{all_parallel, all_settled};
use super::sequential::{sequential_fold, sequential_iterative, sequential_recursive};
use crate::error::Error;
use crate::task::TaskFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Everything at once, fail on the first rejection
    All,
    /// Everything at once, report every outcome
    AllSettled,
    /// One at a time, as a fold
    Fold,
    /// One at a time, as a continuation over the index
    Recursive,
    /// One at a time, with a loop
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::All,
        Strategy::AllSettled,
        Strategy::Fold,
        Strategy::Recursive,
        Strategy::Iterative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::All => "all",
            Strategy::AllSettled => "all-settled",
            Strategy::Fold => "fold",
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(
            self,
            Strategy::Fold | Strategy::Recursive | Strategy::Iterative
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| Error::InvalidOptions(format!("unknown strategy '{}'", s)))
    }
}

/// What a strategy produced when it did not reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Values(Vec<String>),
    Settled(Vec<Outcome>),
}

impl Report {
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Report::Values(values) => Some(values),
            Report::Settled(_) => None,
        }
    }

    pub fn outcomes(&self) -> Option<&[Outcome]> {
        match self {
            Report::Settled(outcomes) => Some(outcomes),
            Report::Values(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Values(values) => values.len(),
            Report::Settled(outcomes) => outcomes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs `tasks` with the chosen strategy.
pub async fn run(strategy: Strategy, tasks: &[TaskFactory]) -> Result<Report, Error> {
    info!("Running {} task(s) with strategy '{}'", tasks.len(), strategy);

    let report = match strategy {
        Strategy::All => Report::Values(all_parallel(tasks).await?),
        Strategy::AllSettled => Report::Settled(all_settled(tasks).await),
        Strategy::Fold => Report::Values(sequential_fold(tasks).await?),
        Strategy::Recursive => Report::Values(sequential_recursive(tasks).await?),
        Strategy::Iterative => Report::Values(sequential_iterative(tasks).await?),
    };

    info!("Strategy '{}' resolved {} result(s)", strategy, report.len());
    Ok(report)
}
