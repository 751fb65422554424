use crate::{Metrics, PollError, ShutdownCoordinator, TwinLookupPolicy, poll_until_found};

use rb_monday::ClientError;

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

fn fast_policy() -> TwinLookupPolicy {
    TwinLookupPolicy::fixed(Duration::from_millis(5))
}

#[tokio::test]
async fn given_twin_appears_on_third_attempt_when_polled_then_found() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    let calls = AtomicU32::new(0);

    let result = poll_until_found(&fast_policy(), "lookup", &mut guard, &Metrics::new(), || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move { Ok((attempt >= 3).then_some(34_i64)) }
    })
    .await;

    assert_eq!(result.unwrap(), 34);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn given_max_attempts_when_never_found_then_exhausted() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    let calls = AtomicU32::new(0);
    let policy = TwinLookupPolicy {
        max_attempts: Some(3),
        ..fast_policy()
    };

    let result = poll_until_found(&policy, "lookup", &mut guard, &Metrics::new(), || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(None::<i64>) }
    })
    .await;

    assert!(matches!(result, Err(PollError::Exhausted { attempts: 3, .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn given_timeout_when_never_found_then_timed_out() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    let policy = TwinLookupPolicy {
        timeout: Some(Duration::from_millis(30)),
        ..fast_policy()
    };

    let result = poll_until_found(&policy, "lookup", &mut guard, &Metrics::new(), || async {
        Ok(None::<i64>)
    })
    .await;

    assert!(matches!(result, Err(PollError::TimedOut { .. })));
}

#[tokio::test]
async fn given_upstream_error_when_polled_then_fails_without_retry() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    let calls = AtomicU32::new(0);

    let result = poll_until_found(&fast_policy(), "lookup", &mut guard, &Metrics::new(), || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err::<Option<i64>, _>(ClientError::missing_data("board 200")) }
    })
    .await;

    assert!(matches!(result, Err(PollError::Failed { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_shutdown_when_waiting_between_attempts_then_cancelled() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    coordinator.shutdown();
    let policy = TwinLookupPolicy::fixed(Duration::from_secs(30));

    let result = poll_until_found(&policy, "lookup", &mut guard, &Metrics::new(), || async {
        Ok(None::<i64>)
    })
    .await;

    assert!(matches!(result, Err(PollError::Cancelled { .. })));
}
