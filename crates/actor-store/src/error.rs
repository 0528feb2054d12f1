//! # Framework Errors
//!
//! Error types shared by every actor and client. Entity-specific failures
//! travel through [`FrameworkError::EntityError`] as a boxed error and can be
//! recovered on the client side with a downcast.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
