use askama::Template;

use crate::models::contact::{ContactForm, FieldErrors};
use crate::models::offer::Offer;
use crate::models::organization::{Organization, OrganizationFields};
use super::PageContext;

#[derive(Template)]
#[template(path = "organizations/list.html")]
pub struct OrganizationListTemplate {
    pub ctx: PageContext,
    pub organizations: Vec<Organization>,
}

#[derive(Template)]
#[template(path = "organizations/form.html")]
pub struct OrganizationFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub organization: OrganizationFields,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "organizations/view.html")]
pub struct OrganizationViewTemplate {
    pub ctx: PageContext,
    pub organization: Organization,
    pub offers: Vec<Offer>,
    pub can_edit: bool,
    pub contact_form: ContactForm,
    pub contact_errors: FieldErrors,
}
