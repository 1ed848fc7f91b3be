/// A volunteer opportunity posted by one organization.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Offer {
    pub id: i64,
    pub organization_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
}

/// New offer data.
#[derive(Debug, Clone, Default)]
pub struct NewOffer {
    pub organization_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
}
