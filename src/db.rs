use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::config::AdminSeed;
use crate::errors::AppError;
use crate::models::user::NewUser;
use crate::store::Repository;

pub async fn init_pool(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the admin account if the database has no users yet.
pub async fn seed_admin(repo: &dyn Repository, admin: &AdminSeed) -> Result<(), AppError> {
    let count = repo.count_users().await?;
    if count > 0 {
        log::info!("Database already has {count} user(s), skipping admin seed");
        return Ok(());
    }

    let hash = password::hash_password_blocking(admin.password.clone()).await?;
    let new = NewUser {
        username: admin.username.clone(),
        email: admin.email.clone(),
        password: hash,
    };
    let id = repo.create_user(&new).await?;
    log::info!("Seeded admin user '{}' (id {id})", admin.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRepository;

    fn seed() -> AdminSeed {
        AdminSeed {
            username: "admin".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
        }
    }

    #[tokio::test]
    async fn seeds_admin_once() {
        let repo = MemoryRepository::new();
        seed_admin(&repo, &seed()).await.expect("seed");
        seed_admin(&repo, &seed()).await.expect("second seed");
        assert_eq!(repo.count_users().await.unwrap(), 1);

        let admin = repo.find_user_by_username("admin").await.unwrap().expect("admin");
        assert_eq!(admin.email, "admin@example.com");
        assert!(password::verify_password("admin123", &admin.password).unwrap());
    }
}
