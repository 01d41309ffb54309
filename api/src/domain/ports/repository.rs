//! Repository port trait
//!
//! Defines the interface for data persistence, generic over the entity
//! type. Implementations are provided by adapters (e.g., PostgreSQL) and
//! by the in-memory test double.

use async_trait::async_trait;

use crate::error::DomainError;

/// Generic repository over one entity type
///
/// The store is the sole owner of persisted state and of identifier
/// assignment; callers pass not-yet-persisted entities to `add` and get
/// back the stored record.
#[async_trait]
pub trait ApplicationRepository<T>: Send + Sync {
    /// Find an entity by its identifier
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, DomainError>;

    /// Fetch the full collection, preserving store order
    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    /// Persist a new entity and return the stored record
    async fn add(&self, entity: &T) -> Result<T, DomainError>;

    /// Update an existing entity and return the stored record
    async fn update(&self, entity: &T) -> Result<T, DomainError>;

    /// Remove an entity from the store
    async fn delete(&self, entity: &T) -> Result<(), DomainError>;
}
