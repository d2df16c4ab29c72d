//! In-memory user account adapters.

mod user;

pub use user::InMemoryUserRepository;
