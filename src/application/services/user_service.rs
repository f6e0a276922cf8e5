//! User management service.

use std::sync::Arc;

use crate::application::fields::RequestFields;
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Validates user requests and forwards them to the repository.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all users ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`User doesn't exist`) if there is no such row.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| User::SCHEMA.not_found())
    }

    /// Creates a user from a request body.
    ///
    /// # Validation
    ///
    /// `name`, `writer`, `admin` and `password` must be present, checked in
    /// that order. Nothing is inserted when a field is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing or mistyped field.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_user(&self, mut fields: RequestFields) -> Result<User, AppError> {
        fields.require(User::SCHEMA.required)?;

        let new_user = NewUser {
            name: fields.take("name")?,
            writer: fields.take("writer")?,
            admin: fields.take("admin")?,
            password: fields.take("password")?,
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Applies a partial update to an existing user.
    ///
    /// Fields outside `name`, `admin`, `writer` and `password` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if no updatable field remains.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_user(&self, id: i64, mut fields: RequestFields) -> Result<(), AppError> {
        self.get_user(id).await?;

        fields.retain(User::SCHEMA.updatable);
        if fields.is_empty() {
            return Err(User::SCHEMA.nothing_to_update());
        }

        let patch = UserPatch {
            name: fields.take_optional("name")?,
            writer: fields.take_optional("writer")?,
            admin: fields.take_optional("admin")?,
            password: fields.take_optional("password")?,
        };

        self.repository.update(id, patch).await?;
        tracing::info!(user_id = id, "User updated");

        Ok(())
    }

    /// Deletes a user along with everything they wrote.
    ///
    /// Not routed over HTTP; used by the `admin` binary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.get_user(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }
}
