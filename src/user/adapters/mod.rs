//! Adapter implementations for user account ports.

pub mod memory;
