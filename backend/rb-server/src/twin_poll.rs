use crate::{Metrics, PollError, ShutdownGuard, TwinLookupPolicy};

use rb_monday::ClientResult;

use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use tokio::time::{Instant, sleep};

/// Repeat `operation` until it yields a value.
///
/// A miss (`Ok(None)`) waits per `policy` and tries again. An upstream
/// error ends the loop at once, as do the policy's limits and the shutdown
/// signal.
pub async fn poll_until_found<F, Fut, T>(
    policy: &TwinLookupPolicy,
    operation_name: &str,
    shutdown: &mut ShutdownGuard,
    metrics: &Metrics,
    mut operation: F,
) -> Result<T, PollError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ClientResult<Option<T>>>,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;
    let mut delay = policy.interval;

    loop {
        attempts += 1;
        metrics.twin_lookup_attempt();

        let found = operation().await.map_err(|source| PollError::Failed {
            operation: operation_name.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(value) = found {
            if attempts > 1 {
                info!("{} succeeded after {} attempts", operation_name, attempts);
            }
            return Ok(value);
        }

        if let Some(max_attempts) = policy.max_attempts
            && attempts >= max_attempts
        {
            return Err(PollError::Exhausted {
                operation: operation_name.to_string(),
                attempts,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut wait = policy.sleep_for(delay);

        if let Some(timeout) = policy.timeout {
            let elapsed = started.elapsed();
            if elapsed >= timeout {
                return Err(PollError::TimedOut {
                    operation: operation_name.to_string(),
                    elapsed,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            wait = wait.min(timeout - elapsed);
        }

        debug!(
            "{} attempt {} found nothing. Retrying in {:?}",
            operation_name, attempts, wait
        );

        tokio::select! {
            _ = sleep(wait) => {}
            _ = shutdown.wait() => {
                return Err(PollError::Cancelled {
                    operation: operation_name.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        delay = policy.next_delay(delay);
    }
}
