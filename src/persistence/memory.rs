//! In-memory store double for handler and flow tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::ContactStore;
use super::models::{ContactMessage, NewContact};
use crate::error::BoardError;

/// Vec-backed [`ContactStore`] with the same id-assignment contract as
/// the MySQL implementation: ids start at 1 and increase monotonically.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: u64,
    rows: Vec<ContactMessage>,
}

impl MemoryContactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn initialize_schema(&self) -> Result<(), BoardError> {
        // Nothing to create; the call must stay idempotent and infallible
        // to mirror CREATE TABLE IF NOT EXISTS.
        Ok(())
    }

    async fn create(&self, contact: &NewContact) -> Result<u64, BoardError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| BoardError::Persistence(e.to_string()))?;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(ContactMessage {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, BoardError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| BoardError::Persistence(e.to_string()))?;
        Ok(inner.rows.clone())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            message: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_distinct_and_monotonic() {
        let store = MemoryContactStore::new();
        let Ok(first) = store.create(&contact("ann")).await else {
            panic!("create failed");
        };
        let Ok(second) = store.create(&contact("bob")).await else {
            panic!("create failed");
        };
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn list_all_returns_insertion_order() {
        let store = MemoryContactStore::new();
        let _ = store.create(&contact("ann")).await;
        let _ = store.create(&contact("bob")).await;

        let Ok(rows) = store.list_all().await else {
            panic!("list failed");
        };
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ann", "bob"]);
    }

    #[tokio::test]
    async fn initialize_schema_is_idempotent() {
        let store = MemoryContactStore::new();
        let _ = store.create(&contact("ann")).await;

        assert!(store.initialize_schema().await.is_ok());
        assert!(store.initialize_schema().await.is_ok());

        let Ok(rows) = store.list_all().await else {
            panic!("list failed");
        };
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryContactStore::new();
        let Ok(rows) = store.list_all().await else {
            panic!("list failed");
        };
        assert!(rows.is_empty());
    }
}
