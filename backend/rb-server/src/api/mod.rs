pub mod actions;
pub mod error;
pub mod extractors;
pub mod outcome;
pub mod requests;
pub mod workflow;
