use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::store::Repository;
use crate::templates_structs::{OrganizationListTemplate, PageContext};

/// GET /organizations
pub async fn list(
    repo: web::Data<dyn Repository>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let organizations = repo.list_organizations().await?;
    let ctx = PageContext::build(&session, "/organizations");
    render(OrganizationListTemplate { ctx, organizations })
}
