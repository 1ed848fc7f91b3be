use crate::auth::validate;

use super::types::{ContactForm, ContactRequest, FieldErrors};

const FIELD_MAX_LEN: usize = 150;
const MESSAGE_MAX_LEN: usize = 5000;

/// Validate a submitted contact form. Name, email and message are required;
/// the phone number is optional.
pub fn validate_contact_form(form: &ContactForm) -> Result<ContactRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.push("name", validate::validate_required(&form.name, "Name", FIELD_MAX_LEN));
    errors.push("email", validate::validate_email(&form.email));
    errors.push("phone_no", validate::validate_optional(&form.phone_no, "Phone number", FIELD_MAX_LEN));
    errors.push("message", validate::validate_required(&form.message, "Message", MESSAGE_MAX_LEN));

    if !errors.is_empty() {
        return Err(errors);
    }

    let phone_no = form.phone_no.trim();
    Ok(ContactRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone_no: (!phone_no.is_empty()).then(|| phone_no.to_string()),
        message: form.message.trim().to_string(),
    })
}
