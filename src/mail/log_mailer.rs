use async_trait::async_trait;

use super::{Email, Mailer};
use crate::errors::AppError;

/// Writes outgoing mail to the log instead of delivering it. Bodies are
/// redacted; only envelope data and the body size are logged.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), AppError> {
        email.validate()?;
        log::info!(
            "[EMAIL] from={} to={} recipient(s) subject={:?} body={} bytes [REDACTED]",
            email.from,
            email.to.len(),
            email.subject,
            email.text.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_mailer_accepts_valid_email() {
        let email = Email {
            from: "from@test.com".into(),
            to: vec!["to@test.com".into()],
            subject: "Test".into(),
            text: "Body".into(),
        };
        assert!(LogMailer::new().send(&email).await.is_ok());
    }

    #[tokio::test]
    async fn log_mailer_validates_email() {
        let email = Email {
            from: "from@test.com".into(),
            to: vec![],
            subject: "Test".into(),
            text: "Body".into(),
        };
        assert!(LogMailer::new().send(&email).await.is_err());
    }
}
