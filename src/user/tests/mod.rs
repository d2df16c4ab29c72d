//! Unit tests for the user domain and account service.


use crate::user::{
    domain::PasswordHash,
    ports::{PasswordHasher, PasswordHasherError},
};

mockall::mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordHasherError>;
        fn verify(&self, plain: &str, hash: &PasswordHash) -> bool;
    }
}
