use crate::error::SourceResult;
use crate::models::SourceContact;
use crate::sources::traits::ContactSource;
use async_trait::async_trait;

/// Contact source over a fixed list of contacts.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    contacts: Vec<SourceContact>,
}

impl MemorySource {
    pub fn new(contacts: Vec<SourceContact>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl ContactSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_contacts(&self) -> SourceResult<Vec<SourceContact>> {
        Ok(self.contacts.clone())
    }
}
