//! Concurrent-write guarantees for both store implementations
//!
//! N concurrent writers must produce exactly N records with N distinct
//! ids: no collision, no lost write.

use std::collections::HashSet;
use std::sync::Arc;

use portfolio_core::ValidatedContact;
use portfolio_storage::{MemoryMessageStore, MessageStore, SledMessageStore};

const WRITERS: usize = 64;

fn contact(n: usize) -> ValidatedContact {
    ValidatedContact {
        name: format!("Sender {n}"),
        email: format!("sender{n}@example.com"),
        subject: format!("Subject {n}"),
        message: format!("Concurrent message number {n}"),
    }
}

async fn run_concurrent_writes(store: Arc<dyn MessageStore>) -> HashSet<u64> {
    let mut handles = Vec::with_capacity(WRITERS);
    for n in 0..WRITERS {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create_message(contact(n)).await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    ids
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn memory_store_concurrent_writes_get_distinct_ids() {
    let store = Arc::new(MemoryMessageStore::new());
    let ids = run_concurrent_writes(store.clone()).await;

    assert_eq!(ids.len(), WRITERS);
    assert_eq!(store.len().await, WRITERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn sled_store_concurrent_writes_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SledMessageStore::open(dir.path()).unwrap());
    let ids = run_concurrent_writes(store.clone()).await;

    assert_eq!(ids.len(), WRITERS);
    assert_eq!(store.len(), WRITERS);
}
