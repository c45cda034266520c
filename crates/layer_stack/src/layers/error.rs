//! Layer stack errors

use thiserror::Error;

use super::layer::LayerId;

/// Errors returned by layer operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayerError {
    /// The handle was destroyed or was issued by another list
    #[error("Layer {0:?} is not part of this layer list")]
    InvalidLayer(LayerId),
}
