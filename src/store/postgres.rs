use async_trait::async_trait;
use sqlx::PgPool;

use super::Repository;
use crate::errors::AppError;
use crate::models::offer::{self, Offer};
use crate::models::organization::{self, Organization, OrganizationFields};
use crate::models::user::{self, NewUser, User};

/// Repository backed by the Postgres pool.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_organizations(&self) -> Result<Vec<Organization>, AppError> {
        Ok(organization::find_all(&self.pool).await?)
    }

    async fn find_organization(&self, id: i64) -> Result<Option<Organization>, AppError> {
        Ok(organization::find_by_id(&self.pool, id).await?)
    }

    async fn create_organization(&self, fields: &OrganizationFields) -> Result<Organization, AppError> {
        Ok(organization::create(&self.pool, fields).await?)
    }

    async fn update_organization(&self, id: i64, fields: &OrganizationFields) -> Result<Organization, AppError> {
        organization::update(&self.pool, id, fields)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn add_organization_to_profile(&self, user_id: i64, organization_id: i64) -> Result<(), AppError> {
        if user::find_profile_by_user_id(&self.pool, user_id).await?.is_none() {
            return Err(AppError::Storage(format!("User {user_id} has no profile")));
        }
        user::add_organization(&self.pool, user_id, organization_id).await?;
        Ok(())
    }

    async fn profile_organization_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        Ok(user::find_organization_ids(&self.pool, user_id).await?)
    }

    async fn offers_for_organization(&self, organization_id: i64) -> Result<Vec<Offer>, AppError> {
        Ok(offer::find_by_organization(&self.pool, organization_id).await?)
    }

    async fn administrator_email(&self, organization_id: i64) -> Result<Option<String>, AppError> {
        Ok(user::find_administrator_email(&self.pool, organization_id).await?)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(user::find_by_username(&self.pool, username).await?)
    }

    async fn create_user(&self, new: &NewUser) -> Result<i64, AppError> {
        Ok(user::create(&self.pool, new).await?)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(user::count(&self.pool).await?)
    }
}
