mod api;
mod runtime;

use crate::{
    ActionSettings, AppState, BackgroundTasks, Metrics, ShutdownCoordinator, TwinLookupPolicy,
};

use rb_auth::JwtValidator;
use rb_config::PlatformConfig;
use rb_monday::{MondayClient, TriggerClient};

use std::sync::Arc;
use std::time::Duration;

pub(crate) const TEST_SECRET: &str = "unit-test-secret";

/// State whose platform client points nowhere; for tests that never reach it
pub(crate) fn offline_state() -> AppState {
    let platform = PlatformConfig {
        api_url: "http://127.0.0.1:9/v2".to_string(),
        account_subdomain: "acme".to_string(),
        ..PlatformConfig::default()
    };
    let metrics = Metrics::new();

    AppState {
        monday: Arc::new(MondayClient::new(&platform).unwrap()),
        trigger: Arc::new(TriggerClient::new(TEST_SECRET, Duration::from_secs(1)).unwrap()),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        settings: ActionSettings {
            account_subdomain: "acme".to_string(),
            twin_lookup: TwinLookupPolicy::fixed(Duration::from_millis(10)),
            callback_delay: Duration::ZERO,
        },
        tasks: BackgroundTasks::new(metrics.clone()),
        shutdown: ShutdownCoordinator::new(),
        metrics,
    }
}
