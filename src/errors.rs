//! Error types for the object pool

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Controller has no registered pools")]
    NoPools,

    #[error("No pool registered for kind '{0}'")]
    UnknownKind(String),

    #[error("Entity factory failed for kind '{0}'")]
    FactoryFailed(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
