//! Shared test infrastructure for the HTTP-level tests.
//!
//! - `test_app!(repo, mailer)` - the real routes behind a cookie session, backed
//!   by an in-memory repository and a recording mailer
//! - `login!(app, username, password)` - log in through `/login`, returns
//!   `(session cookie, csrf token)`
//! - `open_session!(app, uri)` - GET a page anonymously, returns
//!   `(session cookie, csrf token)`
#![allow(dead_code, unused_macros)]

use std::sync::{Arc, Mutex, PoisonError};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::TestRequest;
use async_trait::async_trait;
use regex::Regex;

use volunteer_hub::auth::password;
use volunteer_hub::errors::AppError;
use volunteer_hub::mail::{Email, Mailer};
use volunteer_hub::models::organization::{Organization, OrganizationFields};
use volunteer_hub::models::user::NewUser;
use volunteer_hub::store::{MemoryRepository, Repository};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const MAIL_FROM: &str = "noreply@example.com";

// ============================================================================
// COLLABORATORS
// ============================================================================

/// Mailer that keeps every sent email for inspection.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), AppError> {
        email.validate()?;
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email.clone());
        Ok(())
    }
}

pub fn setup() -> (Arc<MemoryRepository>, Arc<RecordingMailer>) {
    (Arc::new(MemoryRepository::new()), Arc::new(RecordingMailer::default()))
}

macro_rules! test_app {
    ($repo:expr, $mailer:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(actix_web::web::Data::from(
                    $repo.clone() as std::sync::Arc<dyn volunteer_hub::store::Repository>,
                ))
                .app_data(actix_web::web::Data::from(
                    $mailer.clone() as std::sync::Arc<dyn volunteer_hub::mail::Mailer>,
                ))
                .app_data(actix_web::web::Data::new(volunteer_hub::mail::MailSettings {
                    from: crate::common::MAIL_FROM.to_string(),
                }))
                .configure(volunteer_hub::routes),
        )
        .await
    };
}

macro_rules! open_session {
    ($app:expr, $uri:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get().uri($uri).to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK, "GET {}", $uri);
        let cookie = crate::common::session_cookie(&resp).expect("session cookie");
        let body = actix_web::test::read_body(resp).await;
        let token = crate::common::extract_csrf_token(&String::from_utf8_lossy(&body));
        (cookie, token)
    }};
}

macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let (cookie, token) = open_session!($app, "/login");
        let req = crate::common::post_form(
            "/login",
            &cookie,
            &[("username", $username), ("password", $password), ("csrf_token", token.as_str())],
        );
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER, "login failed");
        let cookie = crate::common::session_cookie(&resp).unwrap_or(cookie);
        (cookie, token)
    }};
}

// ============================================================================
// REQUEST / RESPONSE HELPERS
// ============================================================================

/// Find `<input type="hidden" name="csrf_token" value="...">` in a page.
pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#)
        .expect("Failed to compile regex");

    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| {
            eprintln!("CSRF token not found in HTML");
            "invalid_token".to_string()
        })
}

/// The session cookie set by a response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// A url-encoded POST carrying the session cookie.
pub fn post_form(uri: &str, cookie: &Cookie<'static>, fields: &[(&str, &str)]) -> actix_http::Request {
    let body = serde_urlencoded::to_string(fields).expect("encode form");
    TestRequest::post()
        .uri(uri)
        .cookie(cookie.clone())
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(body)
        .to_request()
}

pub fn get(uri: &str, cookie: Option<&Cookie<'static>>) -> actix_http::Request {
    let mut req = TestRequest::get().uri(uri);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie.clone());
    }
    req.to_request()
}

// ============================================================================
// DATA SETUP
// ============================================================================

/// Create a user with a hashed password and an empty profile.
pub async fn create_user(repo: &MemoryRepository, username: &str, pass: &str, email: &str) -> i64 {
    let hash = password::hash_password(pass).expect("hash password");
    repo.create_user(&NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: hash,
    })
    .await
    .expect("create user")
}

/// Create an organization administered by `user_id`.
pub async fn create_organization(repo: &MemoryRepository, user_id: i64, name: &str) -> Organization {
    let org = repo
        .create_organization(&OrganizationFields {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            description: "We help".to_string(),
        })
        .await
        .expect("create organization");
    repo.add_organization_to_profile(user_id, org.id)
        .await
        .expect("link organization");
    org
}
