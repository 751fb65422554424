use crate::ShutdownCoordinator;

use std::time::Duration;

use tokio::time::timeout;

#[tokio::test]
async fn given_guard_when_shutdown_triggered_then_wait_returns() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    let trigger = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.shutdown();
    });

    assert!(timeout(Duration::from_secs(2), guard.wait()).await.is_ok());
    assert!(coordinator.is_shutdown());
}

#[tokio::test]
async fn given_guard_created_after_shutdown_when_wait_then_returns_at_once() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    let mut guard = coordinator.subscribe_guard();

    assert!(
        timeout(Duration::from_millis(50), guard.wait())
            .await
            .is_ok()
    );
}
