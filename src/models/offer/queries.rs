use sqlx::PgPool;

use super::types::Offer;

/// Offers referencing the given organization, oldest first.
pub async fn find_by_organization(pool: &PgPool, organization_id: i64) -> Result<Vec<Offer>, sqlx::Error> {
    sqlx::query_as::<_, Offer>(
        "SELECT id, organization_id, title, description, location \
         FROM offers WHERE organization_id = $1 ORDER BY id",
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await
}
