use crate::{BackgroundTasks, Metrics};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn tasks() -> BackgroundTasks {
    BackgroundTasks::new(Metrics::new())
}

#[tokio::test]
async fn given_deferred_job_when_delay_elapses_then_job_runs_and_deregisters() {
    let tasks = tasks();
    let runs = Arc::new(AtomicUsize::new(0));
    let runs_in_job = runs.clone();

    tasks.spawn_deferred("test", Duration::from_millis(10), async move {
        runs_in_job.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(tasks.in_flight(), 1);

    assert!(tasks.wait_idle(Duration::from_secs(2)).await);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(tasks.in_flight(), 0);
}

#[tokio::test]
async fn given_nothing_scheduled_when_wait_idle_then_returns_at_once() {
    let tasks = tasks();

    assert!(tasks.wait_idle(Duration::from_millis(1)).await);
}

#[tokio::test]
async fn given_pending_job_when_cancelled_then_never_runs() {
    let tasks = tasks();
    let runs = Arc::new(AtomicUsize::new(0));
    let runs_in_job = runs.clone();

    let task = tasks.spawn_deferred("test", Duration::from_millis(50), async move {
        runs_in_job.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(task.label(), "test");

    assert!(task.cancel());
    assert!(!task.cancel());
    assert_eq!(tasks.in_flight(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_slow_job_when_wait_idle_times_out_then_false() {
    let tasks = tasks();
    tasks.spawn_deferred("slow", Duration::from_secs(30), async {});

    assert!(!tasks.wait_idle(Duration::from_millis(20)).await);
    assert_eq!(tasks.in_flight(), 1);

    tasks.abort_all();
}

#[tokio::test]
async fn given_several_pending_jobs_when_abort_all_then_all_dropped() {
    let tasks = tasks();
    tasks.spawn_deferred("first", Duration::from_secs(30), async {});
    tasks.spawn_deferred("second", Duration::from_secs(30), async {});

    assert_eq!(tasks.abort_all(), 2);
    assert_eq!(tasks.in_flight(), 0);
    assert!(tasks.wait_idle(Duration::from_millis(1)).await);
}

#[tokio::test]
async fn given_finished_job_when_cancelled_by_id_then_false() {
    let tasks = tasks();
    let task = tasks.spawn_deferred("quick", Duration::ZERO, async {});

    assert!(tasks.wait_idle(Duration::from_secs(2)).await);
    assert!(!tasks.cancel(task.id()));
}
