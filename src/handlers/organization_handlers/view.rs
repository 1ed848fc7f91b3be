use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::{self, csrf};
use crate::auth::session::{FlashLevel, set_flash};
use crate::errors::{AppError, render};
use crate::mail::{self, MailSettings, Mailer};
use crate::models::contact::{ContactForm, FieldErrors, validate_contact_form};
use crate::models::organization::Organization;
use crate::store::Repository;
use crate::templates_structs::{OrganizationViewTemplate, PageContext};
use super::helpers;

async fn detail_page(
    repo: &dyn Repository,
    session: &Session,
    organization: Organization,
    contact_form: ContactForm,
    contact_errors: FieldErrors,
) -> Result<HttpResponse, AppError> {
    let offers = repo.offers_for_organization(organization.id).await?;
    let can_edit = auth::can_edit_organization(repo, session, organization.id).await?;
    let ctx = PageContext::build(session, "/organizations");
    let tmpl = OrganizationViewTemplate {
        ctx,
        organization,
        offers,
        can_edit,
        contact_form,
        contact_errors,
    };
    render(tmpl)
}

/// GET /organizations/{slug}/{id}
pub async fn view(
    repo: web::Data<dyn Repository>,
    session: Session,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (slug, id) = path.into_inner();
    let organization = helpers::load_organization(repo.get_ref(), id).await?;
    if let Some(redirect) = helpers::correct_slug(&slug, &organization, organization.view_path()) {
        return Ok(redirect);
    }

    detail_page(repo.get_ref(), &session, organization, ContactForm::default(), FieldErrors::default()).await
}

/// POST /organizations/{slug}/{id}
/// Sends the volunteer's contact request to the organization's administrator,
/// or re-renders the page with field errors.
pub async fn contact(
    repo: web::Data<dyn Repository>,
    mailer: web::Data<dyn Mailer>,
    settings: web::Data<MailSettings>,
    session: Session,
    path: web::Path<(String, i64)>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    let (slug, id) = path.into_inner();
    let organization = helpers::load_organization(repo.get_ref(), id).await?;
    if let Some(redirect) = helpers::correct_slug(&slug, &organization, organization.view_path()) {
        return Ok(redirect);
    }
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let submitted = form.into_inner();
    let request = match validate_contact_form(&submitted) {
        Ok(request) => request,
        Err(errors) => {
            set_flash(
                &session,
                FlashLevel::Error,
                format!("The form contains invalid fields: {}", errors.fields().join(", ")),
            );
            return detail_page(repo.get_ref(), &session, organization, submitted, errors).await;
        }
    };

    let administrator = repo
        .administrator_email(id)
        .await?
        .ok_or(AppError::MissingAdministrator(id))?;
    let email = mail::templates::volunteer_to_organisation(
        &settings,
        vec![administrator, request.email.clone()],
        &organization.name,
        &request,
    )?;
    mailer.send(&email).await?;
    log::info!(
        "Sent {} email for organization {id}",
        mail::templates::VOLUNTEER_TO_ORGANISATION
    );

    set_flash(&session, FlashLevel::Success, "Your message has been sent.");
    detail_page(repo.get_ref(), &session, organization, ContactForm::default(), FieldErrors::default()).await
}
