//! Persistence layer: the `contacts` table and its store.
//!
//! Provides the [`ContactStore`] trait as the seam between request
//! handlers and durable storage. The concrete implementation uses
//! `sqlx::MySqlPool` for async MySQL access; tests substitute an
//! in-memory double with the same id-assignment contract.

pub mod models;
pub mod mysql;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::BoardError;
use models::{ContactMessage, NewContact};

/// Durable storage for [`ContactMessage`] records.
///
/// The store exclusively owns the table schema. Records are created by
/// [`create`](ContactStore::create), read in bulk by
/// [`list_all`](ContactStore::list_all), and never updated or deleted.
#[async_trait]
pub trait ContactStore: Send + Sync + std::fmt::Debug {
    /// Idempotently ensures the `contacts` table exists.
    ///
    /// Safe to call on every startup; an existing table is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Persistence`] if the store is unreachable.
    async fn initialize_schema(&self) -> Result<(), BoardError>;

    /// Inserts one record and returns its newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Persistence`] on database failure.
    async fn create(&self, contact: &NewContact) -> Result<u64, BoardError>;

    /// Returns every stored record in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Persistence`] on database failure.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, BoardError>;
}
