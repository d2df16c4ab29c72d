//! Unit tests for the task domain and lifecycle service.
