//! Platform API plumbing: the GraphQL client used by every action and the
//! outbound recipe trigger callback.

pub mod error;
pub mod monday_client;
pub(crate) mod queries;
pub(crate) mod responses;
pub mod trigger_client;
pub mod trigger_output;

pub use error::{ClientError, Result as ClientResult};
pub use monday_client::MondayClient;
pub use trigger_client::TriggerClient;
pub use trigger_output::TriggerOutput;

#[cfg(test)]
mod tests;
