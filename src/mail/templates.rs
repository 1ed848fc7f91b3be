use askama::Template;

use super::{Email, MailSettings};
use crate::errors::AppError;
use crate::models::contact::ContactRequest;

/// Key of the volunteer-to-organization contact email.
pub const VOLUNTEER_TO_ORGANISATION: &str = "volunteer_to_organisation";

#[derive(Template)]
#[template(path = "emails/volunteer_to_organisation_subject.txt")]
struct VolunteerToOrganisationSubject<'a> {
    organization_name: &'a str,
    contact: &'a ContactRequest,
}

#[derive(Template)]
#[template(path = "emails/volunteer_to_organisation.txt")]
struct VolunteerToOrganisationBody<'a> {
    organization_name: &'a str,
    contact: &'a ContactRequest,
}

/// Compose the contact email sent to an organization's administrator and
/// copied to the volunteer.
pub fn volunteer_to_organisation(
    settings: &MailSettings,
    recipients: Vec<String>,
    organization_name: &str,
    contact: &ContactRequest,
) -> Result<Email, AppError> {
    let subject = VolunteerToOrganisationSubject { organization_name, contact }.render()?;
    let text = VolunteerToOrganisationBody { organization_name, contact }.render()?;
    Ok(Email {
        from: settings.from.clone(),
        to: recipients,
        subject: subject.trim().to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_email_carries_every_submitted_field() {
        let settings = MailSettings { from: "noreply@example.com".into() };
        let contact = ContactRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone_no: Some("555 0100".into()),
            message: "I can drive on weekends".into(),
        };
        let email = volunteer_to_organisation(
            &settings,
            vec!["admin@example.com".into(), "ann@example.com".into()],
            "Helpers Inc",
            &contact,
        )
        .expect("compose");

        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.to, vec!["admin@example.com", "ann@example.com"]);
        assert!(email.subject.contains("Helpers Inc"));
        assert!(!email.subject.contains('\n'));
        for field in ["Ann", "ann@example.com", "555 0100", "I can drive on weekends"] {
            assert!(email.text.contains(field), "body misses {field}");
        }
    }

    #[test]
    fn phone_line_is_omitted_when_absent() {
        let settings = MailSettings { from: "noreply@example.com".into() };
        let contact = ContactRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone_no: None,
            message: "Hi".into(),
        };
        let email = volunteer_to_organisation(&settings, vec!["a@example.com".into()], "Org", &contact)
            .expect("compose");
        assert!(!email.text.contains("Phone"));
    }
}
