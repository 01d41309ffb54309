//! User controller
//!
//! CRUD operations over the user repository port. Every outcome is
//! wrapped in an [`ApiResult`] envelope: 200 with data on success, 404
//! with no data when the record is missing or the input fails a presence
//! check. Store faults are not translated here; they propagate to the
//! caller as `DomainError`.

use std::sync::Arc;

use crate::app::ApiResult;
use crate::domain::entities::AppUser;
use crate::domain::ports::ApplicationRepository;
use crate::error::DomainError;

/// Controller for the user entity
///
/// Holds only its repository reference; safe to share across concurrent
/// requests.
pub struct UserController<R>
where
    R: ApplicationRepository<AppUser>,
{
    users: Arc<R>,
}

impl<R> UserController<R>
where
    R: ApplicationRepository<AppUser>,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Fetch a single user by id
    pub async fn get_one(&self, id: &str) -> Result<ApiResult<AppUser>, DomainError> {
        match self.users.get_by_id(id).await? {
            Some(user) => Ok(ApiResult::ok(user)),
            None => {
                tracing::debug!(user_id = %id, "user not found");
                Ok(ApiResult::not_found())
            }
        }
    }

    /// Fetch the full user collection
    ///
    /// An empty store is reported as 404, the same as a missing record.
    /// This is the API's long-standing convention, not an accident.
    pub async fn get_all(&self) -> Result<ApiResult<Vec<AppUser>>, DomainError> {
        let users = self.users.get_all().await?;
        if users.is_empty() {
            tracing::debug!("user collection is empty");
            return Ok(ApiResult::not_found());
        }
        Ok(ApiResult::ok(users))
    }

    /// Create a new user
    ///
    /// Requires both name fields; an invalid payload never reaches the
    /// store and is reported as 404 like every other failure here.
    pub async fn add_user(&self, user: AppUser) -> Result<ApiResult<AppUser>, DomainError> {
        if !user.has_required_names() {
            tracing::warn!("rejecting user create without first and last name");
            return Ok(ApiResult::not_found());
        }

        let created = self.users.add(&user).await?;
        tracing::debug!(user_id = %created.id, "user created");
        Ok(ApiResult::ok(created))
    }

    /// Update an existing user
    ///
    /// Requires a store-assigned id and both name fields; otherwise the
    /// store is never called.
    pub async fn update_user(&self, user: AppUser) -> Result<ApiResult<AppUser>, DomainError> {
        if !user.is_persisted() || !user.has_required_names() {
            tracing::warn!("rejecting user update without id and name fields");
            return Ok(ApiResult::not_found());
        }

        let updated = self.users.update(&user).await?;
        tracing::debug!(user_id = %updated.id, "user updated");
        Ok(ApiResult::ok(updated))
    }

    /// Delete a user by id
    ///
    /// Returns the record as it existed before deletion.
    pub async fn delete_user(&self, id: &str) -> Result<ApiResult<AppUser>, DomainError> {
        let user = match self.users.get_by_id(id).await? {
            Some(user) => user,
            None => {
                tracing::debug!(user_id = %id, "user not found, nothing to delete");
                return Ok(ApiResult::not_found());
            }
        };

        self.users.delete(&user).await?;
        tracing::debug!(user_id = %id, "user deleted");
        Ok(ApiResult::ok(user))
    }
}
