// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{Flash, get_username, take_flash};

mod common;
mod organization;

pub use self::common::{HomeTemplate, LoginTemplate};
pub use self::organization::{OrganizationFormTemplate, OrganizationListTemplate, OrganizationViewTemplate};

pub const APP_NAME: &str = "Volunteer Hub";

/// Common context shared by all pages.
/// Templates access these as `ctx.username`, `ctx.flash`, etc.
pub struct PageContext {
    pub username: Option<String>,
    pub flash: Option<Flash>,
    pub app_name: &'static str,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    /// Consumes any pending flash message from the session.
    pub fn build(session: &Session, current_path: &str) -> Self {
        Self {
            username: get_username(session),
            flash: take_flash(session),
            app_name: APP_NAME,
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    pub fn is_active(&self, prefix: &str) -> bool {
        self.current_path.starts_with(prefix)
    }
}
