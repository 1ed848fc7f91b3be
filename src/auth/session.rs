use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A user-facing notice shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn css_class(&self) -> &'static str {
        match self.level {
            FlashLevel::Success => "flash flash-success",
            FlashLevel::Error => "flash flash-error",
        }
    }
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_username(session: &Session) -> Option<String> {
    session.get::<String>("username").unwrap_or(None)
}

/// The logged-in user's id, or [`AppError::Unauthenticated`] (redirects to /login).
pub fn require_login(session: &Session) -> Result<i64, AppError> {
    get_user_id(session).ok_or(AppError::Unauthenticated)
}

pub fn log_in(session: &Session, user_id: i64, username: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert("user_id", user_id)
        .and_then(|_| session.insert("username", username))
        .map_err(|e| AppError::Session(e.to_string()))
}

pub fn set_flash(session: &Session, level: FlashLevel, message: impl Into<String>) {
    let flash = Flash { level, message: message.into() };
    if let Err(e) = session.insert("flash", &flash) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
