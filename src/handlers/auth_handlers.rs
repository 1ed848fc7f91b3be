use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::{csrf, password};
use crate::auth::session::{get_user_id, log_in};
use crate::errors::{AppError, render, see_other};
use crate::store::Repository;
use crate::templates_structs::{LoginTemplate, PageContext};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

fn login_page_with_error(session: &Session, error: Option<String>) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, "/login");
    render(LoginTemplate { ctx, error })
}

/// GET /login
pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if get_user_id(&session).is_some() {
        return Ok(see_other("/"));
    }
    login_page_with_error(&session, None)
}

/// POST /login
pub async fn login_submit(
    repo: web::Data<dyn Repository>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let found = repo.find_user_by_username(form.username.trim()).await?;

    let Some(user) = found else {
        log::info!("Failed login for unknown user '{}'", form.username.trim());
        return login_page_with_error(&session, Some("Invalid username or password".to_string()));
    };

    if !password::verify_password_blocking(form.password, user.password.clone()).await? {
        log::info!("Failed login for user '{}'", user.username);
        return login_page_with_error(&session, Some("Invalid username or password".to_string()));
    }

    log_in(&session, user.id, &user.username)?;
    log::info!("User '{}' logged in", user.username);
    Ok(see_other("/organizations"))
}

/// POST /logout
pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}
