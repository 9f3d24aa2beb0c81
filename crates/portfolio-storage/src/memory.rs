//! In-memory message store
//!
//! Used by tests and `--ephemeral` runs. Ids are handed out from an
//! atomic counter, so concurrent writers never collide. The store can be
//! flipped into a failing mode to simulate an unavailable medium.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use portfolio_core::{ContactMessage, StorageError, ValidatedContact};

use crate::MessageStore;

/// Non-durable [`MessageStore`] backed by a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    next_id: AtomicU64,
    fail_writes: AtomicBool,
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `StorageError::Unavailable`.
    ///
    /// Test hook for the storage-failure response path.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of records currently held. Test accessor only; nothing in
    /// the request path reads the store.
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    /// Snapshot of the stored records. Test accessor only.
    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn is_available(&self) -> bool {
        !self.fail_writes.load(Ordering::SeqCst)
    }

    async fn create_message(
        &self,
        contact: ValidatedContact,
    ) -> Result<ContactMessage, StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable(
                "memory store is in failing mode",
            ));
        }

        // Take the write lock before assigning the id so a write that
        // fails mid-flight can never publish a half-written record.
        let mut messages = self.messages.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = ContactMessage::from_validated(id, contact);
        messages.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> ValidatedContact {
        ValidatedContact {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "Hi!".to_string(),
            message: "Hello there!".to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_monotonically_increasing_ids() {
        let store = MemoryMessageStore::new();
        let first = store.create_message(sample_contact()).await.unwrap();
        let second = store.create_message(sample_contact()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_submissions_create_distinct_records() {
        let store = MemoryMessageStore::new();
        let a = store.create_message(sample_contact()).await.unwrap();
        let b = store.create_message(sample_contact()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[tokio::test]
    async fn failing_mode_persists_nothing() {
        let store = MemoryMessageStore::new();
        store.set_fail_writes(true);
        assert!(!store.is_available().await);

        let err = store.create_message(sample_contact()).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert!(store.is_empty().await);

        // Recovers once the medium is back.
        store.set_fail_writes(false);
        store.create_message(sample_contact()).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
