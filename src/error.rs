//! Construction-time errors.

use thiserror::Error;

/// Invalid store configuration. Returned by constructors; no store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Ring storage indexes with a bitmask, so its capacity must be 2^k.
    #[error("ring capacity must be a power of two (got {capacity})")]
    NotPowerOfTwo { capacity: usize },
}
