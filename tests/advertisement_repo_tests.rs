mod common;

use classifieds_server_lib::data::models::advertisement::NewAdvertisement;
use classifieds_server_lib::data::models::category::NewCategory;
use classifieds_server_lib::data::models::media_file::NewMediaFile;
use classifieds_server_lib::data::models::user::UserRole;
use classifieds_server_lib::data::repos::implementors::advertisement_repo::AdvertisementRepo;
use classifieds_server_lib::data::repos::implementors::category_repo::CategoryRepo;
use classifieds_server_lib::data::repos::implementors::media_file_repo::MediaFileRepo;
use classifieds_server_lib::data::repos::traits::repository::Repository;
use common::{create_test_user, setup};

async fn create_category(name: &str) -> i32 {
    let repo = CategoryRepo::new();
    repo.add_returning(NewCategory {
        name,
        parent_category_id: None,
    })
    .await
    .expect("Failed to add category")
    .id
}

async fn create_advertisement(user_id: i32, category_id: i32, title: &str) -> i32 {
    let repo = AdvertisementRepo::new();
    repo.add_returning(NewAdvertisement {
        category_id,
        user_id,
        title,
        short_description: "short",
        description: "long description",
    })
    .await
    .expect("Failed to add advertisement")
    .id
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn filter_matches_title_and_description() {
    setup().await.expect("Setup failed");

    let user = create_test_user("seller", UserRole::Member).await;
    let category_id = create_category("furniture").await;

    create_advertisement(user.id, category_id, "Wooden chair").await;
    create_advertisement(user.id, category_id, "Oak table").await;

    let repo = AdvertisementRepo::new();

    let chairs = repo
        .get_by_filter("chair", None)
        .await
        .expect("Filter query failed");
    assert_eq!(chairs.len(), 1);
    assert_eq!(chairs[0].title, "Wooden chair");

    let everything = repo
        .get_by_filter("", None)
        .await
        .expect("Filter query failed");
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn category_filter_restricts_results() {
    setup().await.expect("Setup failed");

    let user = create_test_user("seller", UserRole::Member).await;
    let furniture = create_category("furniture").await;
    let vehicles = create_category("vehicles").await;

    create_advertisement(user.id, furniture, "Wooden chair").await;
    create_advertisement(user.id, vehicles, "Used bike").await;

    let repo = AdvertisementRepo::new();

    let in_furniture = repo
        .get_by_filter("", Some(furniture))
        .await
        .expect("Filter query failed");

    assert_eq!(in_furniture.len(), 1);
    assert_eq!(in_furniture[0].category_id, furniture);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a running MySQL database"]
async fn deleting_advertisement_removes_its_media_files() {
    setup().await.expect("Setup failed");

    let user = create_test_user("seller", UserRole::Member).await;
    let category_id = create_category("furniture").await;
    let advertisement_id = create_advertisement(user.id, category_id, "Wooden chair").await;

    let media_repo = MediaFileRepo::new();
    media_repo
        .add(NewMediaFile {
            advertisement_id,
            url: "http://127.0.0.1:3000/media/chair.jpg",
        })
        .await
        .expect("Failed to add media file");

    let repo = AdvertisementRepo::new();
    repo.delete(advertisement_id)
        .await
        .expect("Failed to delete advertisement");

    assert!(repo
        .get_by_id(advertisement_id)
        .await
        .expect("Lookup failed")
        .is_none());

    let remaining = media_repo
        .get_by_advertisement_id(advertisement_id)
        .await
        .expect("Media lookup failed");
    assert!(remaining.is_empty());
}
