mod action_json;
mod auth_session;
