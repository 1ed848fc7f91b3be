use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{self, csrf};
use crate::errors::{AppError, found, render, see_other};
use crate::models::organization::{Organization, OrganizationFields, OrganizationForm};
use crate::store::Repository;
use crate::templates_structs::{OrganizationFormTemplate, PageContext};
use super::helpers;

fn form_page(
    session: &Session,
    current: &Organization,
    values: OrganizationFields,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, "/organizations");
    let tmpl = OrganizationFormTemplate {
        ctx,
        form_action: current.edit_path(),
        form_title: "Edit Organization".to_string(),
        organization: values,
        errors,
    };
    render(tmpl)
}

enum EditAccess {
    Allowed(Organization),
    Redirect(HttpResponse),
}

/// Shared gate: 404 for unknown ids, canonical-slug redirect, then the
/// per-organization edit permission.
async fn authorize(
    repo: &dyn Repository,
    session: &Session,
    slug: &str,
    id: i64,
) -> Result<EditAccess, AppError> {
    let organization = helpers::load_organization(repo, id).await?;
    if let Some(redirect) = helpers::correct_slug(slug, &organization, organization.edit_path()) {
        return Ok(EditAccess::Redirect(redirect));
    }
    if !auth::can_edit_organization(repo, session, id).await? {
        log::debug!("Edit of organization {id} refused, redirecting home");
        return Ok(EditAccess::Redirect(found("/")));
    }
    Ok(EditAccess::Allowed(organization))
}

/// GET /organizations/{slug}/{id}/edit
pub async fn edit_form(
    repo: web::Data<dyn Repository>,
    session: Session,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (slug, id) = path.into_inner();
    let organization = match authorize(repo.get_ref(), &session, &slug, id).await? {
        EditAccess::Allowed(org) => org,
        EditAccess::Redirect(resp) => return Ok(resp),
    };

    let values = OrganizationFields::from(&organization);
    form_page(&session, &organization, values, vec![])
}

/// POST /organizations/{slug}/{id}/edit
pub async fn update(
    repo: web::Data<dyn Repository>,
    session: Session,
    path: web::Path<(String, i64)>,
    form: web::Form<OrganizationForm>,
) -> Result<HttpResponse, AppError> {
    let (slug, id) = path.into_inner();
    let organization = match authorize(repo.get_ref(), &session, &slug, id).await? {
        EditAccess::Allowed(org) => org,
        EditAccess::Redirect(resp) => return Ok(resp),
    };
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let fields = form.fields();
    let errors = helpers::validate_organization_form(&fields);
    if !errors.is_empty() {
        return form_page(&session, &organization, fields, errors);
    }

    let updated = repo.update_organization(id, &fields).await?;
    log::info!("Updated organization {} '{}'", updated.id, updated.name);
    Ok(see_other(&updated.view_path()))
}
