//! Sled-backed message store
//!
//! Records live in a dedicated `contact_messages` tree, keyed by the
//! big-endian id so iteration order matches insertion order. Ids come
//! from `sled::Db::generate_id`, which is monotonic and safe under
//! concurrent callers, and each insert is a single atomic tree write
//! followed by an async flush.
//!
//! Invariant: an `Err` from `create_message` means no record is visible
//! in the tree. A flush failure after a successful insert is compensated
//! by removing the just-inserted key before the error is returned.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

use portfolio_core::{ContactMessage, StorageError, ValidatedContact};

use crate::MessageStore;

const MESSAGES_TREE: &str = "contact_messages";

/// Durable [`MessageStore`] backed by a sled database.
#[derive(Debug, Clone)]
pub struct SledMessageStore {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledMessageStore {
    /// Open (or create) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref())
            .map_err(|e| StorageError::unavailable(e.to_string()))?;
        let tree = db
            .open_tree(MESSAGES_TREE)
            .map_err(|e| StorageError::unavailable(e.to_string()))?;
        Ok(Self { db, tree })
    }

    /// Number of persisted records. Test accessor only; nothing in the
    /// request path reads the store.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[async_trait]
impl MessageStore for SledMessageStore {
    fn name(&self) -> &str {
        "sled"
    }

    async fn is_available(&self) -> bool {
        // Metadata probe; keeps the record tree write-only.
        self.db.size_on_disk().is_ok()
    }

    async fn create_message(
        &self,
        contact: ValidatedContact,
    ) -> Result<ContactMessage, StorageError> {
        let id = self
            .db
            .generate_id()
            .map_err(|e| StorageError::write_failed(e.to_string()))?;
        let record = ContactMessage::from_validated(id, contact);
        let encoded = serde_json::to_vec(&record)?;

        self.tree
            .insert(id.to_be_bytes(), encoded)
            .map_err(|e| StorageError::write_failed(e.to_string()))?;

        if let Err(flush_err) = self.tree.flush_async().await {
            // The insert already published the record; take it back out
            // so a non-success result never leaves a record behind.
            if let Err(remove_err) = self.tree.remove(id.to_be_bytes()) {
                warn!(
                    id,
                    error = %remove_err,
                    "failed to remove record after flush failure"
                );
            }
            return Err(StorageError::write_failed(flush_err.to_string()));
        }

        debug!(id, store = self.name(), "contact message persisted");
        Ok(record)
    }
}
