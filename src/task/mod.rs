//! Task lifecycle management for the task board.
//!
//! Tasks are created with a title and content, optionally owned by the
//! actor who created them, toggled between done and not done any number of
//! times, and deleted only when [`crate::security::TaskAccessPolicy`]
//! permits it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
