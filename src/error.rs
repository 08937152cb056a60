//! Top-level server error definitions.

use thiserror::Error;

use crate::infrastructure::seed::SeedError;

/// Errors that can stop the server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    /// Seed file could not be loaded
    #[error("Seed loading failed: {0}")]
    Seed(#[from] SeedError),

    /// Network / serving failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
