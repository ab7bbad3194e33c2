use chrono::{DateTime, Utc};
use serde::Serialize;

use super::records::Subscriber;
use super::store::{LeadStore, StoreError};
use super::validation::{self, ValidationError};

pub const SUBSCRIBED: &str = "Successfully subscribed!";
pub const ALREADY_SUBSCRIBED: &str = "You are already subscribed!";
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again.";
pub const CONSULTATION_SUBMITTED: &str = "Consultation request submitted successfully!";
pub const CONSULTATION_FAILED: &str = "Failed to submit request. Please try again.";

/// HTTP statuses the lead endpoints answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Created,
    BadRequest,
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }
}

/// JSON body of a lead endpoint response: `{"message": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Message { message: String },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Message {
                message: message.into(),
            },
        }
    }

    fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: error.into(),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).expect("Response body is plain strings")
    }
}

#[derive(Debug, thiserror::Error)]
enum LeadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

enum SubscribeOutcome {
    Created(Subscriber),
    AlreadySubscribed,
}

/// Newsletter sign-up.
///
/// 201 for a new subscriber, 200 when the (lowercased) email is already
/// subscribed, 400 on validation failure, 500 on storage failure.
pub fn subscribe<S: LeadStore + ?Sized>(
    store: &mut S,
    body: &str,
    now: DateTime<Utc>,
) -> ApiResponse {
    match try_subscribe(store, body, now) {
        Ok(SubscribeOutcome::Created(subscriber)) => {
            log::info!("Subscriber {} created", subscriber.id);
            ApiResponse::message(StatusCode::Created, SUBSCRIBED)
        }
        Ok(SubscribeOutcome::AlreadySubscribed) => {
            ApiResponse::message(StatusCode::Ok, ALREADY_SUBSCRIBED)
        }
        Err(LeadError::Validation(e)) => {
            log::warn!("Subscription rejected: {e}");
            ApiResponse::error(StatusCode::BadRequest, e.to_string())
        }
        Err(LeadError::Store(e)) => {
            log::error!("Subscription error: {e}");
            ApiResponse::error(StatusCode::InternalServerError, SUBSCRIBE_FAILED)
        }
    }
}

fn try_subscribe<S: LeadStore + ?Sized>(
    store: &mut S,
    body: &str,
    now: DateTime<Utc>,
) -> Result<SubscribeOutcome, LeadError> {
    let new = validation::validate_subscription(body, now)?;

    if store.find_subscriber(&new.email)?.is_some() {
        return Ok(SubscribeOutcome::AlreadySubscribed);
    }

    match store.create_subscriber(new) {
        Ok(subscriber) => Ok(SubscribeOutcome::Created(subscriber)),
        // Lost a race with a concurrent sign-up for the same address.
        Err(StoreError::DuplicateEmail(_)) => Ok(SubscribeOutcome::AlreadySubscribed),
        Err(e) => Err(e.into()),
    }
}

/// Consultation request.
///
/// 201 once stored, 400 on validation failure, 500 on storage failure.
pub fn request_consultation<S: LeadStore + ?Sized>(
    store: &mut S,
    body: &str,
    now: DateTime<Utc>,
) -> ApiResponse {
    let result = validation::validate_consultation(body, now)
        .map_err(LeadError::from)
        .and_then(|new| store.create_consultation(new).map_err(LeadError::from));

    match result {
        Ok(request) => {
            log::info!(
                "Consultation request {} created ({})",
                request.id,
                request.client_type
            );
            ApiResponse::message(StatusCode::Created, CONSULTATION_SUBMITTED)
        }
        Err(LeadError::Validation(e)) => {
            log::warn!("Consultation request rejected: {e}");
            ApiResponse::error(StatusCode::BadRequest, e.to_string())
        }
        Err(LeadError::Store(e)) => {
            log::error!("Consultation request error: {e}");
            ApiResponse::error(StatusCode::InternalServerError, CONSULTATION_FAILED)
        }
    }
}
