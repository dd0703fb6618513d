use crate::engine::sequential::{sequential_fold, sequential_iterative, sequential_recursive};
use crate::error::{Error, TaskError};
use crate::task::{FakeTask, FixedDelay, Task, TaskFactory};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// Mock task that records when it starts and ends
struct RecordingTask {
    label: String,
    should_fail: bool,
    delay: Duration,
    events: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Task for RecordingTask {
    async fn execute(&self) -> Result<String, TaskError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {}", self.label));
        tokio::time::sleep(self.delay).await;
        self.events.lock().unwrap().push(format!("end {}", self.label));
        if self.should_fail {
            Err(TaskError::new(self.label.to_lowercase()))
        } else {
            Ok(self.label.to_uppercase())
        }
    }
}

fn recording_tasks(setups: &[(&str, bool, u64)]) -> (Vec<TaskFactory>, Arc<Mutex<Vec<String>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let tasks = setups
        .iter()
        .map(|(label, should_fail, ms)| {
            Arc::new(RecordingTask {
                label: label.to_string(),
                should_fail: *should_fail,
                delay: Duration::from_millis(*ms),
                events: events.clone(),
            }) as TaskFactory
        })
        .collect();
    (tasks, events)
}

#[tokio::test(start_paused = true)]
async fn test_fold_runs_in_strict_order() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 300), ("B", false, 10), ("C", false, 100)]);
    let values = sequential_fold(&tasks).await.unwrap();
    assert_eq!(values, vec!["A", "B", "C"]);
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B", "start C", "end C"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_recursive_runs_in_strict_order() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 300), ("B", false, 10), ("C", false, 100)]);
    let values = sequential_recursive(&tasks).await.unwrap();
    assert_eq!(values, vec!["A", "B", "C"]);
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B", "start C", "end C"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_iterative_runs_in_strict_order() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 300), ("B", false, 10), ("C", false, 100)]);
    let values = sequential_iterative(&tasks).await.unwrap();
    assert_eq!(values, vec!["A", "B", "C"]);
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B", "start C", "end C"]
    );
}

#[tokio::test]
async fn test_fold_stops_at_first_failure() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 0), ("B", true, 0), ("C", false, 0)]);
    let err = sequential_fold(&tasks).await.unwrap_err();
    assert!(matches!(err, Error::Task(ref e) if e.payload() == "b"));
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B"]
    );
}

#[tokio::test]
async fn test_recursive_stops_at_first_failure() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 0), ("B", true, 0), ("C", false, 0)]);
    let err = sequential_recursive(&tasks).await.unwrap_err();
    assert!(matches!(err, Error::Task(ref e) if e.payload() == "b"));
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B"]
    );
}

#[tokio::test]
async fn test_iterative_stops_at_first_failure() {
    let (tasks, events) =
        recording_tasks(&[("A", false, 0), ("B", true, 0), ("C", false, 0)]);
    let err = sequential_iterative(&tasks).await.unwrap_err();
    assert!(matches!(err, Error::Task(ref e) if e.payload() == "b"));
    assert_eq!(
        *events.lock().unwrap(),
        vec!["start A", "end A", "start B", "end B"]
    );
}

#[tokio::test]
async fn test_failure_on_last_index() {
    let (tasks, _) = recording_tasks(&[("A", false, 0), ("Z", true, 0)]);
    assert!(sequential_recursive(&tasks).await.is_err());
    assert!(sequential_fold(&tasks).await.is_err());
    assert!(sequential_iterative(&tasks).await.is_err());
}

#[tokio::test]
async fn test_empty_input() {
    assert!(sequential_fold(&[]).await.unwrap().is_empty());
    assert!(sequential_recursive(&[]).await.unwrap().is_empty());
    assert!(sequential_iterative(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_single_task() {
    let (tasks, _) = recording_tasks(&[("Only", false, 0)]);
    assert_eq!(sequential_recursive(&tasks).await.unwrap(), vec!["ONLY"]);
}

#[tokio::test(start_paused = true)]
async fn test_recursive_handles_long_lists() {
    let delay = Arc::new(FixedDelay::zero());
    let tasks: Vec<TaskFactory> = (0..2_000)
        .map(|i| {
            Arc::new(FakeTask::new(format!("t{}", i)).with_delay(delay.clone())) as TaskFactory
        })
        .collect();
    let values = sequential_recursive(&tasks).await.unwrap();
    assert_eq!(values.len(), 2_000);
    assert_eq!(values[1_999], "T1999");
}

#[tokio::test(start_paused = true)]
async fn test_sequential_time_is_sum_of_delays() {
    let (tasks, _) =
        recording_tasks(&[("A", false, 200), ("B", false, 300), ("C", false, 500)]);
    let started = tokio::time::Instant::now();
    sequential_iterative(&tasks).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1000));
    assert!(elapsed < Duration::from_millis(1030));
}
