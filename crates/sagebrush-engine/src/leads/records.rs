use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Investor category selected on the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Private,
    Professional,
    Institutional,
}

impl ClientType {
    pub const ALL: [ClientType; 3] = [
        ClientType::Private,
        ClientType::Professional,
        ClientType::Institutional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClientType::Private => "private",
            ClientType::Professional => "professional",
            ClientType::Institutional => "institutional",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown client type: {0}")]
pub struct UnknownClientType(pub String);

impl FromStr for ClientType {
    type Err = UnknownClientType;

    /// Exact, case-sensitive match on the form values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientType::ALL
            .into_iter()
            .find(|client_type| client_type.as_str() == s)
            .ok_or_else(|| UnknownClientType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A subscriber about to be stored. `email` is already lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub client_type: ClientType,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A consultation request about to be stored, already normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsultation {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub client_type: ClientType,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewConsultation {
    pub(crate) fn into_record(self, id: i64) -> ConsultationRequest {
        ConsultationRequest {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            client_type: self.client_type,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("private", ClientType::Private)]
    #[case("professional", ClientType::Professional)]
    #[case("institutional", ClientType::Institutional)]
    fn parses_form_values(#[case] value: &str, #[case] expected: ClientType) {
        assert_eq!(value.parse::<ClientType>(), Ok(expected));
        assert_eq!(expected.to_string(), value);
    }

    #[rstest]
    #[case("Private")]
    #[case("retail")]
    #[case("")]
    fn rejects_other_values(#[case] value: &str) {
        assert_eq!(
            value.parse::<ClientType>(),
            Err(UnknownClientType(value.to_string()))
        );
    }
}
