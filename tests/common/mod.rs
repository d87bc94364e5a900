#![allow(dead_code)]

use classifieds_server_lib::data::database::Database;
use classifieds_server_lib::data::models::user::{NewUser, User, UserRole};
use classifieds_server_lib::data::repos::implementors::user_repo::UserRepo;
use classifieds_server_lib::data::repos::traits::repository::Repository;
use classifieds_server_lib::security::auth::AuthService;
use diesel::result;
use diesel_async::RunQueryDsl;

/// Wipes every table, children first.
pub async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use classifieds_server_lib::data::models::schema::advertisement_media_files::dsl::advertisement_media_files;
    use classifieds_server_lib::data::models::schema::advertisements::dsl::advertisements;
    use classifieds_server_lib::data::models::schema::categories::dsl::categories;
    use classifieds_server_lib::data::models::schema::orders::dsl::orders;
    use classifieds_server_lib::data::models::schema::users::dsl::users;

    diesel::delete(advertisement_media_files)
        .execute(&mut conn)
        .await?;
    diesel::delete(advertisements).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(categories).execute(&mut conn).await?;
    diesel::delete(users).execute(&mut conn).await?;

    Ok(())
}

pub async fn create_test_user(username: &str, role: UserRole) -> User {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    let hashed = auth
        .hash_password("testpass123")
        .await
        .expect("Hashing failed");

    let test_user = NewUser {
        username,
        password_hash: &hashed,
        role,
    };

    repo.add(test_user).await.expect("Failed to add user");

    repo.get_by_username(username)
        .await
        .expect("Failed to get user")
        .expect("User not found")
}
