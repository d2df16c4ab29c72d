//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services;
//! a web layer plugs its own persistence in behind them.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
