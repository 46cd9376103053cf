//! Request validation.
//!
//! Runs entirely at the boundary: a malformed signup is rejected before any
//! password hashing or store access happens. Rules mirror the documented
//! contract: bounded lengths everywhere, a shape check on the email, and a
//! complexity floor on the password.

use crate::dto::SignupRequest;
use crate::response::FieldError;

const NAME_MIN: usize = 3;
const FIELD_MAX: usize = 100;
const PASSWORD_MIN: usize = 8;

/// Validate a signup payload, collecting every field problem at once.
pub fn validate_signup(req: &SignupRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    validate_email(&req.email, &mut errors);
    validate_password(&req.password, &mut errors);
    validate_name("firstName", &req.first_name, &mut errors);
    validate_name("lastName", &req.last_name, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.len() < NAME_MIN || email.len() > FIELD_MAX {
        errors.push(FieldError::new(
            "email",
            format!("Must be between {NAME_MIN} and {FIELD_MAX} characters"),
        ));
        return;
    }

    if !is_email_shaped(email) {
        errors.push(FieldError::new("email", "Must be a valid email address"));
    }
}

/// `local@domain` with a dot somewhere in the domain and no whitespace.
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn validate_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.len() < PASSWORD_MIN || password.len() > FIELD_MAX {
        errors.push(FieldError::new(
            "password",
            format!("Must be between {PASSWORD_MIN} and {FIELD_MAX} characters"),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "Must include an uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new(
            "password",
            "Must include a lowercase letter",
        ));
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        errors.push(FieldError::new(
            "password",
            "Must include a special character",
        ));
    }
}

fn validate_name(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.len() < NAME_MIN || value.len() > FIELD_MAX {
        errors.push(FieldError::new(
            field,
            format!("Must be between {NAME_MIN} and {FIELD_MAX} characters"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn accepts_compliant_signup() {
        assert!(validate_signup(&request("jane@example.com", "Abcdef1!")).is_ok());
    }

    #[test]
    fn rejects_weak_password_with_field_errors() {
        let errors = validate_signup(&request("jane@example.com", "abc")).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.iter().all(|f| *f == "password"));
        // Too short, no uppercase, no special character.
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_missing_lowercase() {
        let errors = validate_signup(&request("jane@example.com", "ABCDEF1!")).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("lowercase")));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["no-at-sign.com", "@nodomain", "user@", "user@nodot", "a b@x.com"] {
            let errors = validate_signup(&request(bad, "Abcdef1!")).unwrap_err();
            assert!(
                errors.iter().any(|e| e.field == "email"),
                "expected email error for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_overlong_fields() {
        let long = "x".repeat(101);
        let mut req = request("jane@example.com", "Abcdef1!");
        req.first_name = long;

        let errors = validate_signup(&req).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "firstName"));
    }

    #[test]
    fn collects_errors_across_fields() {
        let req = SignupRequest {
            email: "bad".to_string(),
            password: "abc".to_string(),
            first_name: "J".to_string(),
            last_name: "D".to_string(),
        };

        let errors = validate_signup(&req).unwrap_err();
        let mut fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        fields.dedup();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"firstName"));
        assert!(fields.contains(&"lastName"));
    }
}
