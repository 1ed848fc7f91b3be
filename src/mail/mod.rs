//! Outgoing email.
//!
//! Handlers build an [`Email`] from a template and hand it to the
//! `web::Data<dyn Mailer>` configured at startup: [`SmtpMailer`] when
//! `SMTP_HOST` is set, otherwise [`LogMailer`].

mod log_mailer;
mod smtp;
pub mod templates;

pub use log_mailer::LogMailer;
pub use smtp::{SmtpConfig, SmtpMailer};

use async_trait::async_trait;

use crate::errors::AppError;

/// A plain-text email message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

impl Email {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.from.is_empty() {
            return Err(AppError::Mail("Email 'from' is required".to_string()));
        }
        if self.to.is_empty() {
            return Err(AppError::Mail("Email needs at least one recipient".to_string()));
        }
        if self.subject.is_empty() {
            return Err(AppError::Mail("Email 'subject' is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), AppError>;
}

/// Sender address shared by all outgoing mail.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
}
