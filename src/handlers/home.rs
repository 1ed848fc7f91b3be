use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::store::Repository;
use crate::templates_structs::{HomeTemplate, PageContext};

/// GET /
pub async fn index(
    repo: web::Data<dyn Repository>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let organization_count = repo.list_organizations().await?.len();
    let ctx = PageContext::build(&session, "/");
    render(HomeTemplate { ctx, organization_count })
}
