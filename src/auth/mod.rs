pub mod csrf;
pub mod password;
pub mod session;
pub mod validate;

use actix_session::Session;

use crate::errors::AppError;
use crate::store::Repository;

/// Whether the session's user may edit the organization: they must be
/// logged in and their profile must administer that organization.
pub async fn can_edit_organization(
    repo: &dyn Repository,
    session: &Session,
    organization_id: i64,
) -> Result<bool, AppError> {
    let Some(user_id) = session::get_user_id(session) else {
        return Ok(false);
    };
    let administered = repo.profile_organization_ids(user_id).await?;
    Ok(administered.contains(&organization_id))
}
