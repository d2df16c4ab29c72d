//! Application services for user accounts.

mod accounts;

pub use accounts::{
    EditUserRequest, RegisterUserRequest, UserAccountError, UserAccountResult,
    UserAccountService,
};
