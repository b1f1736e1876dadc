//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

mod account;
pub mod money;
pub mod result;

pub use account::Account;
