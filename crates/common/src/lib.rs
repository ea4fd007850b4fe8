//! Shared plumbing for the isme workspace: logging setup, startup
//! environment checks and small response types used across crates.

pub mod types;
pub mod utils;
pub mod env;
