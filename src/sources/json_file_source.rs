use crate::error::{SourceError, SourceResult};
use crate::models::SourceContact;
use crate::sources::traits::ContactSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Contact source backed by a local JSON file.
///
/// The file holds either an array of contacts or an object with a `contacts`
/// array, as exported by the directory download step.
pub struct JsonFileSource {
    path: PathBuf,
    label: String,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ContactsDocument {
    List(Vec<SourceContact>),
    Wrapped { contacts: Vec<SourceContact> },
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = path.display().to_string();
        Self { path, label }
    }

    /// Decode a contacts document.
    pub fn parse(json: &str) -> SourceResult<Vec<SourceContact>> {
        let document: ContactsDocument = serde_json::from_str(json)?;
        Ok(match document {
            ContactsDocument::List(contacts) => contacts,
            ContactsDocument::Wrapped { contacts } => contacts,
        })
    }
}

#[async_trait]
impl ContactSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.label
    }

    async fn fetch_contacts(&self) -> SourceResult<Vec<SourceContact>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(self.label.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let contacts = Self::parse(&content)?;
        tracing::info!(source = %self.label, count = contacts.len(), "Contacts loaded");
        Ok(contacts)
    }
}
