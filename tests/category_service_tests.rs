mod common;

use classifieds_server_lib::services::category_service::CategoryService;
use classifieds_server_lib::services::errors::CategoryServiceError;
use common::setup;

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn create_rejects_missing_parent() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();

    let result = service.create_category("furniture", Some(9999)).await;

    assert_eq!(result, Err(CategoryServiceError::ParentCategoryNotFound));
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn category_cannot_become_its_own_parent() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();
    let furniture = service
        .create_category("furniture", None)
        .await
        .expect("create failed");

    let result = service
        .update_category(furniture.id, None, Some(Some(furniture.id)))
        .await;

    assert_eq!(result, Err(CategoryServiceError::CategoryCycle));
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn category_cannot_move_under_its_own_descendant() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();
    let root = service
        .create_category("furniture", None)
        .await
        .expect("create failed");
    let child = service
        .create_category("chairs", Some(root.id))
        .await
        .expect("create failed");
    let grandchild = service
        .create_category("office chairs", Some(child.id))
        .await
        .expect("create failed");

    let result = service
        .update_category(root.id, None, Some(Some(grandchild.id)))
        .await;

    assert_eq!(result, Err(CategoryServiceError::CategoryCycle));
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn reparenting_to_a_valid_category_succeeds() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();
    let furniture = service
        .create_category("furniture", None)
        .await
        .expect("create failed");
    let chairs = service
        .create_category("chairs", None)
        .await
        .expect("create failed");

    service
        .update_category(chairs.id, None, Some(Some(furniture.id)))
        .await
        .expect("update failed");

    let (_, children) = service
        .get_category_with_children(furniture.id)
        .await
        .expect("lookup failed")
        .expect("category missing");

    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "chairs");
}
