//! Taskboard: task management with role-based access decisions.
//!
//! Users register and log in, create, edit, toggle and delete tasks, and
//! administrators manage accounts. The crate holds the decision core of
//! that application: the task and account aggregates, the policies that
//! decide who may delete a task or edit an account, and services that
//! apply those policies around pluggable persistence.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! HTTP routing, rendering, password hashing algorithms and database
//! storage are left to the embedding application.
//!
//! # Modules
//!
//! - [`security`]: Actors, roles and access policies
//! - [`task`]: Task lifecycle (done flag and ownership)
//! - [`user`]: Account registration, login and administration
//! - [`config`]: Typed configuration

pub mod config;
pub mod security;
pub mod task;
pub mod user;
