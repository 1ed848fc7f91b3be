use actix_web::HttpResponse;

use crate::auth::validate;
use crate::errors::{AppError, found};
use crate::models::organization::{NAME_MAX_LEN, Organization, OrganizationFields};
use crate::slug::canonical_slug;
use crate::store::Repository;

/// Validate organization form data (used in both create and update flows).
/// Only the constraint the schema enforces is checked: the name length. An
/// empty name is stored as is.
pub fn validate_organization_form(fields: &OrganizationFields) -> Vec<String> {
    let mut errors = vec![];
    errors.extend(validate::validate_optional(&fields.name, "Name", NAME_MAX_LEN));
    errors
}

/// Load an organization or fail with 404.
pub async fn load_organization(repo: &dyn Repository, id: i64) -> Result<Organization, AppError> {
    repo.find_organization(id).await?.ok_or(AppError::NotFound)
}

/// Redirect to `canonical_path` when the slug in the URL no longer matches
/// the organization's current name.
pub fn correct_slug(requested_slug: &str, organization: &Organization, canonical_path: String) -> Option<HttpResponse> {
    if requested_slug == canonical_slug(&organization.name) {
        return None;
    }
    log::debug!(
        "Stale slug '{requested_slug}' for organization {}, redirecting to {canonical_path}",
        organization.id
    );
    Some(found(&canonical_path))
}
