use actix_web::cookie::Key;

use crate::mail::SmtpConfig;

/// Account created on first start when the user table is empty.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Runtime configuration, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub session_key: Option<String>,
    pub session_secure: bool,
    pub mail_from: String,
    pub smtp: Option<SmtpConfig>,
    pub admin: AdminSeed,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:8080"),
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            session_key: std::env::var("SESSION_KEY").ok(),
            session_secure: std::env::var("SESSION_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            mail_from: env_or("MAIL_FROM", "noreply@localhost"),
            smtp: SmtpConfig::from_env(),
            admin: AdminSeed {
                username: env_or("ADMIN_USERNAME", "admin"),
                email: env_or("ADMIN_EMAIL", "admin@localhost"),
                password: env_or("ADMIN_PASSWORD", "admin123"),
            },
        }
    }

    /// Session encryption key. Set SESSION_KEY to keep sessions valid across restarts.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
