use crate::error::SourceResult;
use crate::models::SourceContact;
use async_trait::async_trait;

/// A directory of address-book contacts.
///
/// Provides abstraction over where contacts come from (local file, remote
/// directory server, in-memory fixture). The conversion engine never sees the
/// origin, only the yielded records.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Retrieve every contact, in a stable order.
    async fn fetch_contacts(&self) -> SourceResult<Vec<SourceContact>>;
}
