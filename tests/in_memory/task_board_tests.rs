//! In-memory integration tests for the task board workflow.

use crate::test_helpers::{TestAccountService, TestTaskService, account_service, task_service};
use rstest::{fixture, rstest};
use taskboard::security::Actor;
use taskboard::task::services::{CreateTaskRequest, TaskLifecycleError};
use taskboard::user::services::RegisterUserRequest;

struct Board {
    accounts: TestAccountService,
    tasks: TestTaskService,
}

#[fixture]
fn board() -> Board {
    Board {
        accounts: account_service(),
        tasks: task_service(),
    }
}

async fn login(board: &Board, name: &str, email: &str, role: &str) -> Actor {
    board
        .accounts
        .register(RegisterUserRequest::new(name, email, "password").with_role(role))
        .await
        .expect("registration should succeed");
    board
        .accounts
        .authenticate(email, "password")
        .await
        .expect("login should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logged_in_users_manage_their_own_tasks(board: Board) {
    let kelly = login(&board, "Kelly", "kelly@example.com", "ROLE_USER").await;
    let freddy = login(&board, "Freddy", "freddy@example.com", "ROLE_USER").await;

    let kelly_task = board
        .tasks
        .create(CreateTaskRequest::new("Water plants", "Balcony and kitchen"), Some(&kelly))
        .await
        .expect("task creation should succeed");
    board
        .tasks
        .create(CreateTaskRequest::new("Fix bike", "Rear brake"), Some(&freddy))
        .await
        .expect("task creation should succeed");

    let toggled = board
        .tasks
        .toggle(kelly_task.id())
        .await
        .expect("toggle should succeed");
    assert!(toggled.is_done());

    let denied = board.tasks.delete(&freddy, kelly_task.id()).await;
    assert!(matches!(denied, Err(TaskLifecycleError::Forbidden { .. })));

    board
        .tasks
        .delete(&kelly, kelly_task.id())
        .await
        .expect("owner deletion should succeed");

    let remaining = board.tasks.list().await.expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|task| task.owner() == Some(freddy.id())));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn administrator_clears_anonymous_tasks_only(board: Board) {
    let admin = login(&board, "Mickael", "admin@example.com", "ROLE_ADMIN").await;
    let kelly = login(&board, "Kelly", "kelly@example.com", "ROLE_USER").await;

    let anonymous = board
        .tasks
        .create(CreateTaskRequest::new("Legacy task", "Imported without author"), None)
        .await
        .expect("task creation should succeed");
    let owned = board
        .tasks
        .create(CreateTaskRequest::new("Private task", "Belongs to Kelly"), Some(&kelly))
        .await
        .expect("task creation should succeed");

    board
        .tasks
        .delete(&admin, anonymous.id())
        .await
        .expect("administrator may delete anonymous task");
    let denied = board.tasks.delete(&admin, owned.id()).await;

    assert!(matches!(denied, Err(TaskLifecycleError::Forbidden { .. })));
    let remaining = board.tasks.list().await.expect("listing should succeed");
    assert_eq!(remaining, vec![owned]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_preserves_creation_order(board: Board) {
    for title in ["First", "Second", "Third"] {
        board
            .tasks
            .create(CreateTaskRequest::new(title, "body"), None)
            .await
            .expect("task creation should succeed");
    }

    let titles: Vec<String> = board
        .tasks
        .list()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}
