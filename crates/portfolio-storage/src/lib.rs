//! Contact message persistence
//!
//! The store is the only shared mutable resource in the system, and it
//! exposes exactly one operation to the rest of the codebase: append a
//! validated message and hand back the persisted record with its assigned
//! id. There is no read, update, or delete surface.
//!
//! Two implementations:
//!
//! - [`SledMessageStore`]: durable, sled-backed. Ids come from
//!   `sled::Db::generate_id`, which is monotonic and race-free across
//!   arbitrarily many concurrent writers.
//! - [`MemoryMessageStore`]: in-process, for tests and ephemeral runs.
//!   Can be switched into a failing mode to exercise the storage-failure
//!   path end to end.
//!
//! Both guarantee the append is all-or-nothing: a failed call leaves no
//! partial record behind.

use std::fmt;

use async_trait::async_trait;

use portfolio_core::{ContactMessage, StorageError, ValidatedContact};

mod memory;
mod sled_store;

pub use memory::MemoryMessageStore;
pub use sled_store::SledMessageStore;

/// The persistence seam for contact messages.
///
/// Implementations must make `create_message` safe for arbitrarily many
/// concurrent callers: every successful call appends exactly one record
/// with an id no other call observes.
#[async_trait]
pub trait MessageStore: Send + Sync + fmt::Debug {
    /// Returns the unique name of this store, for logs and health checks.
    fn name(&self) -> &str;

    /// Check whether the persistence medium is currently usable.
    async fn is_available(&self) -> bool {
        true
    }

    /// Persist a validated contact message.
    ///
    /// # Returns
    ///
    /// The persisted record including its assigned `id`, or a
    /// [`StorageError`] if the write could not complete — in which case
    /// no record was created.
    async fn create_message(
        &self,
        contact: ValidatedContact,
    ) -> Result<ContactMessage, StorageError>;
}
