use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use super::records::{ClientType, NewConsultation, NewSubscriber};

/// A client error in a submitted form. The message is shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Client type is required")]
    ClientTypeRequired,
    #[error("Invalid client type")]
    InvalidClientType,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));
    regex.is_match(email)
}

/// Validate a newsletter sign-up body (`{"email": ...}`).
pub fn validate_subscription(
    body: &str,
    now: DateTime<Utc>,
) -> Result<NewSubscriber, ValidationError> {
    let fields = parse_object(body)?;
    let email = validated_email(&fields)?;

    Ok(NewSubscriber {
        email,
        created_at: now,
    })
}

/// Validate a consultation form body.
///
/// Fields are checked in form order: first name, last name, email, client
/// type. Phone, company and message are optional.
pub fn validate_consultation(
    body: &str,
    now: DateTime<Utc>,
) -> Result<NewConsultation, ValidationError> {
    let fields = parse_object(body)?;

    let first_name = required_str(&fields, "firstName", ValidationError::FirstNameRequired)?;
    let last_name = required_str(&fields, "lastName", ValidationError::LastNameRequired)?;
    let email = validated_email(&fields)?;
    let client_type = required_str(&fields, "clientType", ValidationError::ClientTypeRequired)?
        .parse::<ClientType>()
        .map_err(|_| ValidationError::InvalidClientType)?;

    Ok(NewConsultation {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email,
        phone: optional_trimmed(&fields, "phone"),
        company: optional_trimmed(&fields, "company"),
        client_type,
        message: optional_trimmed(&fields, "message"),
        created_at: now,
    })
}

/// Anything other than a JSON object, unparseable text included, is a client
/// error rather than a server failure.
fn parse_object(body: &str) -> Result<Map<String, Value>, ValidationError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        _ => Err(ValidationError::InvalidBody),
    }
}

/// A present, non-blank string field.
fn required_str<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    missing: ValidationError,
) -> Result<&'a str, ValidationError> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(missing)
}

/// Lowercased email; dedup and storage both use this form.
fn validated_email(fields: &Map<String, Value>) -> Result<String, ValidationError> {
    let email = required_str(fields, "email", ValidationError::EmailRequired)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.trim().to_lowercase())
}

fn optional_trimmed(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
