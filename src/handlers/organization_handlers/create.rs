use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::require_login;
use crate::errors::{AppError, render, see_other};
use crate::models::organization::{OrganizationFields, OrganizationForm};
use crate::store::Repository;
use crate::templates_structs::{OrganizationFormTemplate, PageContext};
use super::helpers;

const CREATE_PATH: &str = "/organizations/create";

fn form_page(
    session: &Session,
    organization: OrganizationFields,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, "/organizations");
    let tmpl = OrganizationFormTemplate {
        ctx,
        form_action: CREATE_PATH.to_string(),
        form_title: "New Organization".to_string(),
        organization,
        errors,
    };
    render(tmpl)
}

/// GET /organizations/create
pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    require_login(&session)?;
    form_page(&session, OrganizationFields::default(), vec![])
}

/// POST /organizations/create
/// Persists the organization, adds it to the user's profile and redirects to
/// its detail page.
pub async fn create(
    repo: web::Data<dyn Repository>,
    session: Session,
    form: web::Form<OrganizationForm>,
) -> Result<HttpResponse, AppError> {
    let user_id = require_login(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let fields = form.fields();
    let errors = helpers::validate_organization_form(&fields);
    if !errors.is_empty() {
        return form_page(&session, fields, errors);
    }

    let organization = repo.create_organization(&fields).await?;
    repo.add_organization_to_profile(user_id, organization.id).await?;

    log::info!(
        "User {user_id} created organization {} '{}'",
        organization.id,
        organization.name
    );
    Ok(see_other(&organization.view_path()))
}
