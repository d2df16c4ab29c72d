//! In-memory adapters backing task services in tests and prototypes.

mod task;

pub use task::InMemoryTaskRepository;
