//! Step definitions for task deletion authorization scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
