pub mod action_settings;
pub mod api;
pub mod app_state;
pub mod background_tasks;
pub mod deferred_task;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod poll_error;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod twin_lookup_policy;
pub mod twin_poll;

#[cfg(test)]
mod tests;

pub use action_settings::ActionSettings;
pub use api::{
    actions::{
        assign_creator, clone_item, map_existing_items, recipe_subscribed, recipe_unsubscribed,
        set_month, subscribe_team, sync_item,
    },
    error::ActionError,
    error::Result as ActionResult,
    extractors::{action_json::ActionJson, auth_session::AuthSession},
    outcome::ActionOutcome,
};
pub use app_state::AppState;
pub use background_tasks::BackgroundTasks;
pub use deferred_task::DeferredTask;
pub use error::{Result as ServerErrorResult, ServerError};
pub use metrics::Metrics;
pub use poll_error::PollError;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use twin_lookup_policy::TwinLookupPolicy;
pub use twin_poll::poll_until_found;

pub use crate::routes::build_router;
