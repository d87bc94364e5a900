mod common;

use classifieds_server_lib::data::models::user::{UpdateUser, UserRole};
use classifieds_server_lib::data::repos::implementors::user_repo::UserRepo;
use classifieds_server_lib::data::repos::traits::repository::Repository;
use common::{create_test_user, setup};

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn added_user_is_found_by_username_and_id() {
    setup().await.expect("Setup failed");

    let user = create_test_user("alice", UserRole::Member).await;
    let repo = UserRepo::new();

    let by_id = repo
        .get_by_id(user.id)
        .await
        .expect("Failed to get user")
        .expect("User not found");

    assert_eq!(by_id.username, "alice");
    assert_eq!(by_id.role, UserRole::Member);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn missing_username_returns_none() {
    setup().await.expect("Setup failed");

    let repo = UserRepo::new();
    let missing = repo
        .get_by_username("nobody")
        .await
        .expect("Lookup failed");

    assert!(missing.is_none());
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn update_changes_username() {
    setup().await.expect("Setup failed");

    let user = create_test_user("bob", UserRole::Member).await;
    let repo = UserRepo::new();

    let update = UpdateUser {
        username: Some("robert"),
        password_hash: None,
        role: None,
    };

    repo.update(user.id, update)
        .await
        .expect("Failed to update user");

    let updated = repo
        .get_by_id(user.id)
        .await
        .expect("Failed to get user")
        .expect("User not found");

    assert_eq!(updated.username, "robert");
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn deleted_user_is_gone() {
    setup().await.expect("Setup failed");

    let user = create_test_user("carol", UserRole::Member).await;
    let repo = UserRepo::new();

    repo.delete(user.id).await.expect("Failed to delete user");

    assert!(repo
        .get_by_id(user.id)
        .await
        .expect("Lookup failed")
        .is_none());
}
