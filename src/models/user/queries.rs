use sqlx::PgPool;

use super::types::{NewUser, User, UserProfile};

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Create a user together with its profile. Returns the new user id.
pub async fn create(pool: &PgPool, new: &NewUser) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&new.username)
    .bind(&new.email)
    .bind(&new.password)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO user_profiles (user_id) VALUES ($1)")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(user_id)
}

pub async fn find_profile_by_user_id(pool: &PgPool, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT id, user_id FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Ids of the organizations a user's profile administers.
pub async fn find_organization_ids(pool: &PgPool, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT po.organization_id FROM profile_organizations po \
         JOIN user_profiles p ON p.id = po.profile_id \
         WHERE p.user_id = $1 \
         ORDER BY po.organization_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Link an organization to the profile of `user_id`. Linking twice is a no-op.
pub async fn add_organization(pool: &PgPool, user_id: i64, organization_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO profile_organizations (profile_id, organization_id) \
         SELECT p.id, $2 FROM user_profiles p WHERE p.user_id = $1 \
         ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(organization_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Email of the user behind the first profile administering an organization.
pub async fn find_administrator_email(pool: &PgPool, organization_id: i64) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT u.email FROM profile_organizations po \
         JOIN user_profiles p ON p.id = po.profile_id \
         JOIN users u ON u.id = p.user_id \
         WHERE po.organization_id = $1 \
         ORDER BY p.id \
         LIMIT 1",
    )
    .bind(organization_id)
    .fetch_optional(pool)
    .await
}
