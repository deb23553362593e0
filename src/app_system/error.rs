use thiserror::Error;

use super::config::ConfigError;
use crate::clients::OrderError;

/// Errors raised while starting or stopping the cart system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Order client error: {0}")]
    OrderClient(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    ActorJoin(#[from] tokio::task::JoinError),
}
