//! Unit tests for roles and access policies.
