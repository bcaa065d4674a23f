//! Login Form Validation
//!
//! Field-level checks that must pass before any network call is attempted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Credentials;

pub const MSG_EMAIL_REQUIRED: &str = "El correo electrónico es requerido";
pub const MSG_EMAIL_INVALID: &str = "Correo electrónico inválido";
pub const MSG_PASSWORD_REQUIRED: &str = "La contraseña es requerida";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Per-field messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Validate raw form input. On success returns credentials ready to submit,
/// with the email trimmed; on failure returns the messages to render under
/// each field.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();

    if email.is_empty() {
        errors.email = Some(MSG_EMAIL_REQUIRED);
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.email = Some(MSG_EMAIL_INVALID);
    }
    if password.is_empty() {
        errors.password = Some(MSG_PASSWORD_REQUIRED);
    }

    if errors != FieldErrors::default() {
        return Err(errors);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_flag_both_messages() {
        let errors = validate_credentials("", "").unwrap_err();
        assert_eq!(errors.email, Some(MSG_EMAIL_REQUIRED));
        assert_eq!(errors.password, Some(MSG_PASSWORD_REQUIRED));
    }

    #[test]
    fn missing_password_flags_only_password() {
        let errors = validate_credentials("admin@be.com", "").unwrap_err();
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some(MSG_PASSWORD_REQUIRED));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["admin", "admin@", "@be.com", "admin@be", "admin be@x.com"] {
            let errors = validate_credentials(email, "secret").unwrap_err();
            assert_eq!(errors.email, Some(MSG_EMAIL_INVALID), "{email}");
        }
    }

    #[test]
    fn valid_input_yields_trimmed_credentials() {
        let credentials = validate_credentials("  admin@be.com ", "secret").unwrap();
        assert_eq!(credentials.email, "admin@be.com");
        assert_eq!(credentials.password, "secret");
    }
}
