use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error, info};
use std::sync::Arc;

use super::outcome::Outcome;
use crate::error::Error;
use crate::task::TaskFactory;


/// Starts every task at once and waits for all of them.
///
/// Results come back in input order. The first task to reject, in time,
/// fails the whole call; tasks still in flight at that point are left
/// running on the runtime and their results are never looked at.
pub async fn all_parallel(tasks: &[TaskFactory]) -> Result<Vec<String>, Error> {
    debug!("Starting {} tasks in parallel", tasks.len());

    let mut in_flight: FuturesUnordered<_> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let task = Arc::clone(task);
            let handle = tokio::spawn(async move { task.execute().await });
            async move { (index, handle.await) }
        })
        .collect();

    let mut slots: Vec<Option<String>> = vec![None; tasks.len()];
    while let Some((index, joined)) = in_flight.next().await {
        match joined {
            Ok(Ok(value)) => {
                debug!("Task {} fulfilled", index);
                slots[index] = Some(value);
            }
            Ok(Err(e)) => {
                info!(
                    "Task {} rejected with '{}', leaving {} task(s) unobserved",
                    index,
                    e,
                    in_flight.len()
                );
                return Err(Error::Task(e));
            }
            Err(e) => {
                error!("Task {} did not run to completion: {}", index, e);
                return Err(Error::Join {
                    index,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Starts every task at once and reports how each one settled, in input order.
pub async fn all_settled(tasks: &[TaskFactory]) -> Vec<Outcome> {
    debug!("Starting {} tasks in parallel, collecting outcomes", tasks.len());

    let outcomes: Vec<Outcome> = join_all(tasks.iter().map(|task| task.execute()))
        .await
        .into_iter()
        .map(Outcome::from_result)
        .collect();

    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    info!(
        "All {} tasks settled ({} rejected)",
        outcomes.len(),
        rejected
    );
    outcomes
}
