mod error;
mod extractors;
mod outcome;
