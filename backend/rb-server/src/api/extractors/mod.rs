pub mod action_json;
pub mod auth_session;
