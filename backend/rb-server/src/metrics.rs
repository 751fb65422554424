use metrics::{counter, gauge};

/// Metrics collector for action handling.
///
/// Only the `metrics` facade is used; nothing is recorded unless the
/// process installs a recorder.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "rb_server" }
    }

    /// Action ran to completion
    pub fn action_completed(&self, action: &str) {
        counter!(format!("{}.actions.completed", self.prefix)).increment(1);
        counter!(format!("{}.actions.completed.{}", self.prefix, action)).increment(1);
    }

    /// Action short-circuited on a precondition
    pub fn action_skipped(&self, action: &str) {
        counter!(format!("{}.actions.skipped", self.prefix)).increment(1);
        counter!(format!("{}.actions.skipped.{}", self.prefix, action)).increment(1);
    }

    /// Action answered with the generic server error
    pub fn action_failed(&self, action: &str) {
        counter!(format!("{}.actions.failed", self.prefix)).increment(1);
        counter!(format!("{}.actions.failed.{}", self.prefix, action)).increment(1);
    }

    /// One twin lookup query issued
    pub fn twin_lookup_attempt(&self) {
        counter!(format!("{}.twin_lookup.attempts", self.prefix)).increment(1);
    }

    pub fn trigger_sent(&self) {
        counter!(format!("{}.triggers.sent", self.prefix)).increment(1);
    }

    pub fn trigger_failed(&self) {
        counter!(format!("{}.triggers.failed", self.prefix)).increment(1);
    }

    /// Current number of deferred tasks waiting or running
    pub fn deferred_in_flight(&self, count: usize) {
        gauge!(format!("{}.deferred.in_flight", self.prefix)).set(count as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
