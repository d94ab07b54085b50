use async_trait::async_trait;
use phonebook_converter::error::{SourceError, SourceResult};
use phonebook_converter::models::SourceContact;
use phonebook_converter::sources::ContactSource;
use std::sync::{Arc, Mutex};

/// Mock contact source for testing.
///
/// Holds contacts in memory, can be told to fail, and counts fetches for
/// verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactSource {
    contacts: Arc<Mutex<Vec<SourceContact>>>,
    failure: Arc<Mutex<Option<String>>>,
    fetch_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactSource {
    /// Create a new empty MockContactSource.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a contact to the mock source.
    pub fn add_contact(&self, contact: SourceContact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Add multiple contacts to the mock source.
    pub fn add_contacts(&self, contacts: Vec<SourceContact>) {
        self.contacts.lock().unwrap().extend(contacts);
    }

    /// Make every subsequent fetch fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times contacts were fetched.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

impl Default for MockContactSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSource for MockContactSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_contacts(&self) -> SourceResult<Vec<SourceContact>> {
        *self.fetch_count.lock().unwrap() += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(SourceError::Other(message));
        }
        Ok(self.contacts.lock().unwrap().clone())
    }
}
