//! Error types for account management.

use crate::model::Capability;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("No user found with name {0}")]
    NotFound(String),

    /// A user with this username already exists.
    #[error("User {0} already exists")]
    DuplicateUsername(String),

    /// Accounts must have a username.
    #[error("User cannot have an empty username")]
    EmptyUsername,

    /// Accounts must have a credential.
    #[error("User cannot have an empty password")]
    EmptyCredential,

    /// The username collides with a reserved route name.
    #[error("User cannot have username of '{0}'")]
    ReservedUsername(String),

    /// The requesting user lacks the needed capability.
    #[error("This operation requires the {0} capability")]
    Forbidden(Capability),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunication(msg)
    }
}
