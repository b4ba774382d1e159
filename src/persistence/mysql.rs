//! MySQL implementation of the persistence layer.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::ContactStore;
use super::models::{ContactMessage, NewContact};
use crate::error::BoardError;

/// MySQL-backed store using `sqlx::MySqlPool`.
#[derive(Debug, Clone)]
pub struct MySqlContactStore {
    pool: MySqlPool,
}

impl MySqlContactStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for MySqlContactStore {
    async fn initialize_schema(&self) -> Result<(), BoardError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (\
             id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
             name VARCHAR(255) NOT NULL, \
             email VARCHAR(255) NOT NULL, \
             message TEXT NOT NULL)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| BoardError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn create(&self, contact: &NewContact) -> Result<u64, BoardError> {
        let result =
            sqlx::query("INSERT INTO contacts (name, email, message) VALUES (?, ?, ?)")
                .bind(&contact.name)
                .bind(&contact.email)
                .bind(&contact.message)
                .execute(&self.pool)
                .await
                .map_err(|e| BoardError::Persistence(e.to_string()))?;

        Ok(result.last_insert_id())
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, BoardError> {
        let rows = sqlx::query_as::<_, (u64, String, String, String)>(
            "SELECT id, name, email, message FROM contacts ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BoardError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email, message)| ContactMessage {
                id,
                name,
                email,
                message,
            })
            .collect())
    }
}
