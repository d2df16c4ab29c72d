//! In-memory integration tests for account registration and administration.

use crate::test_helpers::{TestAccountService, account_service};
use rstest::{fixture, rstest};
use taskboard::security::Role;
use taskboard::user::services::{EditUserRequest, RegisterUserRequest, UserAccountError};

#[fixture]
fn accounts() -> TestAccountService {
    account_service()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_accounts_are_listed_in_order(accounts: TestAccountService) {
    for (name, email) in [
        ("Mickael", "contact@example.com"),
        ("Kelly", "kelly.l@example.com"),
        ("Freddy", "freddy.g@example.com"),
    ] {
        accounts
            .register(RegisterUserRequest::new(name, email, "password"))
            .await
            .expect("registration should succeed");
    }

    let names: Vec<String> = accounts
        .list()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|user| user.username().as_str().to_owned())
        .collect();
    assert_eq!(names, ["Mickael", "Kelly", "Freddy"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promoted_user_can_then_edit_accounts(accounts: TestAccountService) {
    let admin = accounts
        .register(
            RegisterUserRequest::new("Mickael", "contact@example.com", "password")
                .with_role("ROLE_ADMIN"),
        )
        .await
        .expect("registration should succeed");
    let kelly = accounts
        .register(RegisterUserRequest::new("Kelly", "kelly.l@example.com", "password"))
        .await
        .expect("registration should succeed");

    let before = accounts
        .edit(&kelly.actor(), admin.id(), EditUserRequest::new().with_username("x"))
        .await;
    assert!(matches!(before, Err(UserAccountError::Forbidden { .. })));

    accounts
        .edit(
            &admin.actor(),
            kelly.id(),
            EditUserRequest::new().with_role("ROLE_ADMIN"),
        )
        .await
        .expect("administrator may promote");

    let promoted = accounts
        .authenticate("kelly.l@example.com", "password")
        .await
        .expect("login should succeed");
    assert!(promoted.roles().contains(Role::Administrator));

    accounts
        .edit(
            &promoted,
            admin.id(),
            EditUserRequest::new().with_username("Mickael G"),
        )
        .await
        .expect("promoted user may edit accounts");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn changed_password_replaces_old_credentials(accounts: TestAccountService) {
    let admin = accounts
        .register(
            RegisterUserRequest::new("Mickael", "contact@example.com", "password")
                .with_role("ROLE_ADMIN"),
        )
        .await
        .expect("registration should succeed");

    accounts
        .edit(
            &admin.actor(),
            admin.id(),
            EditUserRequest::new().with_password("another-password"),
        )
        .await
        .expect("self edit should succeed");

    let old = accounts
        .authenticate("contact@example.com", "password")
        .await;
    assert!(matches!(old, Err(UserAccountError::AuthenticationFailed)));
    accounts
        .authenticate("contact@example.com", "another-password")
        .await
        .expect("new password should work");
}
