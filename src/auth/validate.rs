/// Validate an email: required, max 150 characters, and parseable as a
/// mailbox address so outgoing mail can be addressed to it.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.chars().count() > 150 {
        return Some("Email must be at most 150 characters".to_string());
    }
    if trimmed.parse::<lettre::Address>().is_err() {
        return Some("Email must be a valid address".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert_eq!(validate_email("a@b.org"), None);
        assert!(validate_email("").is_some());
        assert!(validate_email("@b.org").is_some());
        assert!(validate_email("a@b@c.org").is_some());
        assert!(validate_email("ann smith@example.com").is_some());
        assert!(validate_email("ann@exa mple.com").is_some());
    }

    #[test]
    fn email_length_counts_characters() {
        let too_long = Some("Email must be at most 150 characters".to_string());
        let wide = format!("{}@example.com", "ż".repeat(100));
        assert!(wide.len() > 150);
        assert_ne!(validate_email(&wide), too_long);

        let long = format!("{}@example.com", "a".repeat(140));
        assert_eq!(validate_email(&long), too_long);
    }

    #[test]
    fn required_counts_characters_not_bytes() {
        let name = "ż".repeat(150);
        assert_eq!(validate_required(&name, "Name", 150), None);
        assert!(validate_required(&format!("{name}x"), "Name", 150).is_some());
        assert_eq!(validate_required("   ", "Name", 150), Some("Name is required".to_string()));
    }

    #[test]
    fn optional_allows_blank() {
        assert_eq!(validate_optional("", "Phone", 3), None);
        assert!(validate_optional("1234", "Phone", 3).is_some());
    }
}
