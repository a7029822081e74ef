//! The fetch boundary.
//!
//! A view suspends only here. Everything after `fetch` is synchronous.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::endpoint::Endpoint;
use crate::error::ClientError;

/// Something that can produce the raw response body for an endpoint.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<String, ClientError>;
}

/// Reads saved responses from `<root>/<endpoint key>.json`.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, endpoint: &Endpoint) -> PathBuf {
        self.root.join(format!("{}.json", endpoint.key()))
    }
}

#[async_trait]
impl LedgerSource for FileSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<String, ClientError> {
        let path = self.path_for(endpoint);
        tracing::debug!(path = %path.display(), "reading saved response");

        tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ClientError::NotFound(path.display().to_string()),
            _ => ClientError::Transport(format!("{}: {}", path.display(), e)),
        })
    }
}

/// In-memory responses keyed by endpoint (no persistence).
#[derive(Debug, Default)]
pub struct InMemorySource {
    responses: RwLock<HashMap<Endpoint, Result<String, ClientError>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `endpoint`.
    pub fn respond(&self, endpoint: Endpoint, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(endpoint, Ok(body.into()));
    }

    /// Fail every fetch of `endpoint` with `error`.
    pub fn fail(&self, endpoint: Endpoint, error: ClientError) {
        self.responses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(endpoint, Err(error));
    }
}

#[async_trait]
impl LedgerSource for InMemorySource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<String, ClientError> {
        let responses = self.responses.read().unwrap_or_else(PoisonError::into_inner);
        responses
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| Err(ClientError::NotFound(endpoint.key())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_source_serves_and_fails() {
        let source = InMemorySource::new();
        source.respond(Endpoint::CashBook, "[]");
        source.fail(
            Endpoint::Parties(taskprime_parties::PartyKind::Debtor),
            ClientError::Transport("connection reset".into()),
        );

        assert_eq!(source.fetch(&Endpoint::CashBook).await.unwrap(), "[]");
        assert_eq!(
            source.fetch(&Endpoint::Parties(taskprime_parties::PartyKind::Debtor)).await,
            Err(ClientError::Transport("connection reset".into()))
        );
        assert_eq!(
            source.fetch(&Endpoint::Parties(taskprime_parties::PartyKind::Supplier)).await,
            Err(ClientError::NotFound("parties-suppliers".into()))
        );
    }

    #[tokio::test]
    async fn poisoned_table_still_records_and_serves() {
        let source = std::sync::Arc::new(InMemorySource::new());
        let poisoner = std::sync::Arc::clone(&source);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.responses.write().unwrap();
            panic!("poison the response table");
        })
        .join();
        assert!(source.responses.is_poisoned());

        source.respond(Endpoint::CashBook, "[1]");
        assert_eq!(source.fetch(&Endpoint::CashBook).await.unwrap(), "[1]");

        source.fail(Endpoint::CashBook, ClientError::Transport("down".into()));
        assert_eq!(
            source.fetch(&Endpoint::CashBook).await,
            Err(ClientError::Transport("down".into()))
        );
    }

    #[tokio::test]
    async fn file_source_reads_by_endpoint_key() {
        let root = std::env::temp_dir().join(format!("taskprime-source-{}", std::process::id()));
        tokio::fs::create_dir_all(&root).await.unwrap();
        let source = FileSource::new(&root);
        tokio::fs::write(source.path_for(&Endpoint::CashBook), r#"{"data": []}"#)
            .await
            .unwrap();

        assert_eq!(source.fetch(&Endpoint::CashBook).await.unwrap(), r#"{"data": []}"#);
        let missing = source
            .fetch(&Endpoint::Parties(taskprime_parties::PartyKind::Customer))
            .await
            .unwrap_err();
        assert!(matches!(missing, ClientError::NotFound(path) if path.ends_with("parties-customers.json")));

        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
