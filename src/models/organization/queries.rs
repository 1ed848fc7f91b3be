use sqlx::PgPool;

use super::types::{Organization, OrganizationFields};

const SELECT_ORGANIZATION: &str = "SELECT id, name, address, description FROM organizations";

/// All organizations in storage order.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Organization>, sqlx::Error> {
    sqlx::query_as::<_, Organization>(&format!("{SELECT_ORGANIZATION} ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Organization>, sqlx::Error> {
    sqlx::query_as::<_, Organization>(&format!("{SELECT_ORGANIZATION} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new organization and return it with its assigned id.
pub async fn create(pool: &PgPool, fields: &OrganizationFields) -> Result<Organization, sqlx::Error> {
    sqlx::query_as::<_, Organization>(
        "INSERT INTO organizations (name, address, description) VALUES ($1, $2, $3) \
         RETURNING id, name, address, description",
    )
    .bind(&fields.name)
    .bind(&fields.address)
    .bind(&fields.description)
    .fetch_one(pool)
    .await
}

/// Overwrite name, address and description. Returns `None` if the id is unknown.
pub async fn update(
    pool: &PgPool,
    id: i64,
    fields: &OrganizationFields,
) -> Result<Option<Organization>, sqlx::Error> {
    sqlx::query_as::<_, Organization>(
        "UPDATE organizations SET name = $1, address = $2, description = $3 \
         WHERE id = $4 \
         RETURNING id, name, address, description",
    )
    .bind(&fields.name)
    .bind(&fields.address)
    .bind(&fields.description)
    .bind(id)
    .fetch_optional(pool)
    .await
}
