use super::records::{ConsultationRequest, NewConsultation, NewSubscriber, Subscriber};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Subscriber already exists: {0}")]
    DuplicateEmail(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only record store for captured leads.
///
/// Records are never updated or deleted. Emails are compared exactly, so
/// callers pass them already lowercased.
pub trait LeadStore {
    fn find_subscriber(&mut self, email: &str) -> Result<Option<Subscriber>, StoreError>;

    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken.
    fn create_subscriber(&mut self, subscriber: NewSubscriber) -> Result<Subscriber, StoreError>;

    fn create_consultation(
        &mut self,
        request: NewConsultation,
    ) -> Result<ConsultationRequest, StoreError>;
}

/// Process-local store, used for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    subscribers: Vec<Subscriber>,
    consultations: Vec<ConsultationRequest>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    pub fn consultations(&self) -> &[ConsultationRequest] {
        &self.consultations
    }

    fn next_id(len: usize) -> i64 {
        i64::try_from(len).map_or(i64::MAX, |n| n + 1)
    }
}

impl LeadStore for MemoryLeadStore {
    fn find_subscriber(&mut self, email: &str) -> Result<Option<Subscriber>, StoreError> {
        Ok(self.subscribers.iter().find(|s| s.email == email).cloned())
    }

    fn create_subscriber(&mut self, subscriber: NewSubscriber) -> Result<Subscriber, StoreError> {
        if self.subscribers.iter().any(|s| s.email == subscriber.email) {
            return Err(StoreError::DuplicateEmail(subscriber.email));
        }

        let record = Subscriber {
            id: Self::next_id(self.subscribers.len()),
            email: subscriber.email,
            created_at: subscriber.created_at,
        };
        self.subscribers.push(record.clone());
        Ok(record)
    }

    fn create_consultation(
        &mut self,
        request: NewConsultation,
    ) -> Result<ConsultationRequest, StoreError> {
        let record = request.into_record(Self::next_id(self.consultations.len()));
        self.consultations.push(record.clone());
        Ok(record)
    }
}
