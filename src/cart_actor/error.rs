use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ValidationError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart item validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
}
