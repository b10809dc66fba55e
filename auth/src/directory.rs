use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// An entity eligible to authenticate.
///
/// Immutable once loaded: there is no signup flow, and principals are never
/// mutated or deleted after process initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier (e.g. an email address)
    pub id: String,
    /// Stored password digest in PHC string format
    pub credential_digest: String,
    /// Identifier of the scheme that produced the digest
    pub algorithm: String,
}

/// Error type for credential directory operations.
///
/// Only persistent implementations can fail; transient store failures are
/// theirs to retry, never the caller's.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Credential store error: {0}")]
    Store(String),
}

/// Read access to stored principals.
///
/// Callers depend on this trait so a persistent store can replace the
/// in-memory table without touching them.
#[async_trait]
pub trait CredentialDirectory: Send + Sync + 'static {
    /// Retrieve a principal by identifier.
    ///
    /// Exact, case-sensitive match; no partial matching.
    ///
    /// # Arguments
    /// * `id` - Principal identifier
    ///
    /// # Returns
    /// Optional principal (None if not found)
    ///
    /// # Errors
    /// * `Store` - Underlying store failed
    async fn lookup(&self, id: &str) -> Result<Option<Principal>, DirectoryError>;
}

/// Fixed in-memory principal table, seeded at startup.
pub struct InMemoryCredentialDirectory {
    principals: HashMap<String, Principal>,
}

impl InMemoryCredentialDirectory {
    /// Build the directory from seed principals.
    ///
    /// # Arguments
    /// * `principals` - Seed data loaded at process initialization
    pub fn new(principals: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            principals: principals
                .into_iter()
                .map(|principal| (principal.id.clone(), principal))
                .collect(),
        }
    }
}

#[async_trait]
impl CredentialDirectory for InMemoryCredentialDirectory {
    async fn lookup(&self, id: &str) -> Result<Option<Principal>, DirectoryError> {
        Ok(self.principals.get(id).cloned())
    }
}
