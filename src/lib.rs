// relwatch: report new GitHub releases since the last run.

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod input;
pub mod locator;
pub mod log;
pub mod report;
pub mod runner;

pub use error::{RelwatchError, Result};
