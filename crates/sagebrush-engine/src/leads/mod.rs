//! # Lead Capture
//!
//! Write path behind the newsletter and consultation forms.
//!
//! - **`validation`**: field presence and format checks on incoming JSON
//! - **`records`**: stored record types
//! - **`store`**: the `LeadStore` trait and an in-memory implementation
//! - **`sqlite`**: SQLite-backed `LeadStore`
//! - **`handlers`**: request handlers mapping outcomes to HTTP status + JSON body

pub mod handlers;
pub mod records;
pub mod sqlite;
pub mod store;
pub mod validation;

pub use handlers::{ApiResponse, ResponseBody, StatusCode, request_consultation, subscribe};
pub use records::{ClientType, ConsultationRequest, NewConsultation, NewSubscriber, Subscriber};
pub use sqlite::SqliteLeadStore;
pub use store::{LeadStore, MemoryLeadStore, StoreError};
pub use validation::ValidationError;
