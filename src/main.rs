use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use volunteer_hub::config::AppConfig;
use volunteer_hub::mail::{LogMailer, MailSettings, Mailer, SmtpMailer};
use volunteer_hub::store::{MemoryRepository, PgRepository, Repository};
use volunteer_hub::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let repo: Arc<dyn Repository> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url).await.map_err(std::io::Error::other)?;
            db::run_migrations(&pool).await.map_err(std::io::Error::other)?;
            Arc::new(PgRepository::new(pool))
        }
        None => {
            log::warn!("No DATABASE_URL set, using in-memory storage (data lost on restart)");
            Arc::new(MemoryRepository::new())
        }
    };

    db::seed_admin(repo.as_ref(), &config.admin)
        .await
        .map_err(std::io::Error::other)?;

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            log::info!("Sending mail through SMTP relay {}:{}", smtp.host, smtp.port);
            Arc::new(SmtpMailer::new(smtp).map_err(std::io::Error::other)?)
        }
        None => {
            log::warn!("No SMTP_HOST set, outgoing mail is only logged");
            Arc::new(LogMailer::new())
        }
    };

    let repo = web::Data::from(repo);
    let mailer = web::Data::from(mailer);
    let mail_settings = web::Data::new(MailSettings { from: config.mail_from.clone() });
    let secret_key = config.session_key();
    let session_secure = config.session_secure;

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(session_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(mailer.clone())
            .app_data(mail_settings.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
