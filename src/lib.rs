pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod mail;
pub mod models;
pub mod slug;
pub mod store;
pub mod templates_structs;

use actix_web::{HttpResponse, web};

const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");

/// Register every application route. Expects `web::Data<dyn Repository>`,
/// `web::Data<dyn Mailer>` and `web::Data<MailSettings>` as app data and a
/// session middleware around the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home::index))
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .route("/logout", web::post().to(handlers::auth_handlers::logout))
        // /organizations/create BEFORE /organizations/{slug}/{id}
        .route("/organizations", web::get().to(handlers::organization_handlers::list))
        .route("/organizations/create", web::get().to(handlers::organization_handlers::new_form))
        .route("/organizations/create", web::post().to(handlers::organization_handlers::create))
        .route("/organizations/{slug}/{id}/edit", web::get().to(handlers::organization_handlers::edit_form))
        .route("/organizations/{slug}/{id}/edit", web::post().to(handlers::organization_handlers::update))
        .route("/organizations/{slug}/{id}", web::get().to(handlers::organization_handlers::view))
        .route("/organizations/{slug}/{id}", web::post().to(handlers::organization_handlers::contact))
        .default_service(web::to(|| async {
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_PAGE)
        }));
}
