//! # Taskboard Smoke
//!
//! End-to-end smoke test runner for the Taskboard task-management API.
//!
//! This library provides:
//! - A typed HTTP client for the Taskboard REST endpoints
//! - A sequential scenario runner that walks the API through a full
//!   workspace → project → sections → tasks lifecycle and halts on the
//!   first unexpected response
//!
//! ## Scenario Flow
//! 1. Authenticate and capture the bearer token
//! 2. Create a workspace, a project, and three ordered sections
//! 3. Create three tasks and exercise update / subtask / comment /
//!    dependency / move / my-tasks / search endpoints
//! 4. Print a summary and exit 0, or report the failed step and exit
//!    non-zero
//!
//! ## Modules
//! - `client`: Taskboard API client
//! - `scenario`: the ordered step sequence and its carried state
//! - `config`: environment-driven configuration

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod scenario;

pub use client::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use scenario::{run_scenario, ScenarioOutcome};
