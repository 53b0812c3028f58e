//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Only the checked API variants (`get`, `try_assign_from`, `try_view`, ...) report
//! errors; the plain access path keeps the unchecked, caller-validates contract.
use thiserror::Error;

use crate::bounds::Bounds;
use crate::coord::{Extents, Indices};

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of bounds for extents {extents}")]
    OutOfBounds { index: Indices, extents: Extents },

    #[error("extents mismatch: expected {expected}, got {actual}")]
    ExtentsMismatch { expected: Extents, actual: Extents },

    #[error("view bounds {bounds:?} exceed parent extents {extents}")]
    ViewOutOfBounds { bounds: Bounds, extents: Extents },
}
