use crate::{DeferredTask, Metrics};

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::Notify;
use tokio::task::AbortHandle;
use tokio::time::{Instant, sleep, timeout_at};
use uuid::Uuid;

struct TrackedTask {
    label: String,
    abort: AbortHandle,
}

struct Inner {
    tasks: Mutex<HashMap<Uuid, TrackedTask>>,
    idle: Notify,
    metrics: Metrics,
}

/// Registry of deferred work that outlives the request that scheduled it.
///
/// Every task is tracked from spawn until it finishes or is cancelled, so
/// shutdown can wait for pending callbacks instead of dropping them.
#[derive(Clone)]
pub struct BackgroundTasks {
    inner: Arc<Inner>,
}

impl BackgroundTasks {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(Inner {
                tasks: Mutex::new(HashMap::new()),
                idle: Notify::new(),
                metrics,
            }),
        }
    }

    /// Run `job` after `delay` on the runtime and track it until done
    pub fn spawn_deferred<F>(&self, label: &str, delay: Duration, job: F) -> DeferredTask
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = Uuid::new_v4();
        let registry = self.clone();
        let task_label = label.to_string();

        // Held across spawn so the task cannot deregister before it is registered.
        let mut tasks = self.lock();

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            debug!("Deferred task {} '{}' running", id, task_label);
            job.await;
            registry.finish(id);
        });

        tasks.insert(
            id,
            TrackedTask {
                label: label.to_string(),
                abort: handle.abort_handle(),
            },
        );
        let count = tasks.len();
        drop(tasks);

        self.inner.metrics.deferred_in_flight(count);
        debug!("Deferred task {} '{}' scheduled in {:?}", id, label, delay);

        DeferredTask::new(id, label, self.clone())
    }

    /// Number of tasks scheduled or running
    pub fn in_flight(&self) -> usize {
        self.lock().len()
    }

    /// Abort a task; false when it already finished
    pub fn cancel(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id);

        match removed {
            Some(task) => {
                task.abort.abort();
                info!("Deferred task {} '{}' cancelled", id, task.label);
                self.after_removal();
                true
            }
            None => false,
        }
    }

    /// Wait until no task is in flight; false if `timeout` elapsed first
    pub async fn wait_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        loop {
            // Registered before the check so a concurrent finish is not missed.
            let notified = self.inner.idle.notified();

            if self.in_flight() == 0 {
                return true;
            }

            if timeout_at(deadline, notified).await.is_err() {
                return self.in_flight() == 0;
            }
        }
    }

    /// Abort everything still tracked and return how many were aborted
    pub fn abort_all(&self) -> usize {
        let drained: Vec<(Uuid, TrackedTask)> = self.lock().drain().collect();

        for (id, task) in &drained {
            task.abort.abort();
            warn!("Deferred task {} '{}' aborted", id, task.label);
        }

        self.after_removal();
        drained.len()
    }

    fn finish(&self, id: Uuid) {
        if self.lock().remove(&id).is_some() {
            debug!("Deferred task {} finished", id);
            self.after_removal();
        }
    }

    fn after_removal(&self) {
        let count = self.in_flight();
        self.inner.metrics.deferred_in_flight(count);
        if count == 0 {
            self.inner.idle.notify_waiters();
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, TrackedTask>> {
        self.inner
            .tasks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
