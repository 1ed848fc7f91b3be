//! Persistence seam for the handlers.
//!
//! Handlers receive a `web::Data<dyn Repository>`. Production wires
//! [`PgRepository`]; development without `DATABASE_URL` and the integration
//! tests use [`MemoryRepository`].

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::offer::Offer;
use crate::models::organization::{Organization, OrganizationFields};
use crate::models::user::{NewUser, User};

#[async_trait]
pub trait Repository: Send + Sync {
    /// All organizations in storage order.
    async fn list_organizations(&self) -> Result<Vec<Organization>, AppError>;

    async fn find_organization(&self, id: i64) -> Result<Option<Organization>, AppError>;

    /// Persist a new organization and return it with its assigned id.
    async fn create_organization(&self, fields: &OrganizationFields) -> Result<Organization, AppError>;

    /// Overwrite an organization. Fails with [`AppError::NotFound`] for unknown ids.
    async fn update_organization(&self, id: i64, fields: &OrganizationFields) -> Result<Organization, AppError>;

    /// Add an organization to the profile of `user_id`.
    async fn add_organization_to_profile(&self, user_id: i64, organization_id: i64) -> Result<(), AppError>;

    /// Ids of the organizations administered by the profile of `user_id`.
    async fn profile_organization_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError>;

    async fn offers_for_organization(&self, organization_id: i64) -> Result<Vec<Offer>, AppError>;

    /// Email of the user behind the organization's administering profile.
    async fn administrator_email(&self, organization_id: i64) -> Result<Option<String>, AppError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Create a user and its profile. Returns the user id.
    async fn create_user(&self, new: &NewUser) -> Result<i64, AppError>;

    async fn count_users(&self) -> Result<i64, AppError>;
}
