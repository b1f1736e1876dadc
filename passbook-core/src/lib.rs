//! Passbook Core - business logic for a single in-memory bank account
//!
//! This crate implements the core domain logic:
//!
//! - **domain**: The account entity, money parsing/formatting, error types
//! - **services**: Orchestration of account operations (scenario runner)
//!
//! Everything here is pure, synchronous logic. Console rendering and
//! argument parsing live in the CLI crate.

pub mod domain;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::money;
pub use domain::result::{Error, Result};
pub use domain::Account;
pub use services::{Operation, ScenarioReport, ScenarioService, StepRecord};
