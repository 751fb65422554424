use crate::{ActionSettings, BackgroundTasks, Metrics, ShutdownCoordinator};

use rb_auth::JwtValidator;
use rb_monday::{MondayClient, TriggerClient};

use std::sync::Arc;

/// Shared application state for action handlers
#[derive(Clone)]
pub struct AppState {
    pub monday: Arc<MondayClient>,
    pub trigger: Arc<TriggerClient>,
    pub jwt_validator: Arc<JwtValidator>,
    pub settings: ActionSettings,
    pub tasks: BackgroundTasks,
    pub shutdown: ShutdownCoordinator,
    pub metrics: Metrics,
}
