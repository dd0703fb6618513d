use futures::future::BoxFuture;
use futures::stream::{self, TryStreamExt};
use log::debug;

use super::sequence_state::SequenceState;
use crate::error::{Error, TaskError};
use crate::task::TaskFactory;

#[cfg(test)]
mod tests;

fn advance(state: SequenceState, succeeded: bool, len: usize) -> SequenceState {
    let next = state.on_settled(succeeded, len);
    debug!("Sequence {} -> {}", state, next);
    next
}

/// Runs the tasks one after another as a fold over the task list.
///
/// Task `i + 1` is only started once task `i` has succeeded. The first
/// rejection ends the run and later tasks are never started.
pub async fn sequential_fold(tasks: &[TaskFactory]) -> Result<Vec<String>, Error> {
    let len = tasks.len();
    let seed = (Vec::with_capacity(len), SequenceState::start(len));

    let (values, _) = stream::iter(tasks.iter().map(Ok::<_, TaskError>))
        .try_fold(seed, |(mut values, state), task| async move {
            let result = task.execute().await;
            let state = advance(state, result.is_ok(), len);
            values.push(result?);
            Ok::<_, TaskError>((values, state))
        })
        .await?;

    Ok(values)
}

enum Continuation {
    Next { index: usize, values: Vec<String> },
    Done(Vec<String>),
}

fn step(
    tasks: &[TaskFactory],
    index: usize,
    mut values: Vec<String>,
) -> BoxFuture<'_, Result<Continuation, TaskError>> {
    Box::pin(async move {
        let result = tasks[index].execute().await;
        let state = advance(SequenceState::Pending(index), result.is_ok(), tasks.len());
        values.push(result?);
        match state {
            SequenceState::Pending(next) => Ok(Continuation::Next {
                index: next,
                values,
            }),
            _ => Ok(Continuation::Done(values)),
        }
    })
}

/// Runs the tasks one after another as a continuation over the task index.
///
/// Each step runs one task and hands back the continuation for the next
/// index; the last index hands back the finished accumulator. Steps are
/// driven from a loop so deep task lists do not grow the stack.
pub async fn sequential_recursive(tasks: &[TaskFactory]) -> Result<Vec<String>, Error> {
    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    let mut continuation = step(tasks, 0, Vec::with_capacity(tasks.len())).await?;
    loop {
        match continuation {
            Continuation::Next { index, values } => {
                continuation = step(tasks, index, values).await?;
            }
            Continuation::Done(values) => return Ok(values),
        }
    }
}

/// Runs the tasks one after another with a plain loop, awaiting each in turn.
pub async fn sequential_iterative(tasks: &[TaskFactory]) -> Result<Vec<String>, Error> {
    let len = tasks.len();
    let mut values = Vec::with_capacity(len);
    let mut state = SequenceState::start(len);

    for task in tasks {
        let result = task.execute().await;
        state = advance(state, result.is_ok(), len);
        values.push(result?);
    }

    Ok(values)
}
