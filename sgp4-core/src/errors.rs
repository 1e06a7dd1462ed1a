//! Error types for batch propagation.
//!
//! The propagation math itself never fails: invalid elements (eccentricity at
//! or above one, non-finite values) come out the other end as NaN or infinite
//! state components. [`Sgp4Error`] covers the failures around the math:
//! buffer allocation, row addressing, buffer shapes, upstream element
//! validation and model lookup.
//!
//! | Variant | Raised by | Recoverable? |
//! |---------|-----------|--------------|
//! | [`AllocationFailure`](Sgp4Error::AllocationFailure) | batch and result allocation | No |
//! | [`IndexOutOfRange`](Sgp4Error::IndexOutOfRange) | row writes | Yes |
//! | [`BufferTooSmall`](Sgp4Error::BufferTooSmall) | single-step output slices | Yes |
//! | [`ShapeMismatch`](Sgp4Error::ShapeMismatch) | sweeps into an existing result | Yes |
//! | [`InvalidElements`](Sgp4Error::InvalidElements) | [`ElementSet::validate`](crate::ElementSet::validate) | No |
//! | [`UnknownModel`](Sgp4Error::UnknownModel) | model lookup by name | Yes |
//!
//! ```
//! use sgp4_core::{Sgp4Error, Sgp4Result};
//!
//! fn row(index: usize, count: usize) -> Sgp4Result<usize> {
//!     if index >= count {
//!         return Err(Sgp4Error::index_out_of_range(index, count));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(row(8, 8).is_err());
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Sgp4Error {
    /// Memory for a column or result channel could not be reserved.
    #[error("Allocation failed for {buffer}: {elements} f64 values")]
    AllocationFailure { buffer: String, elements: usize },

    /// A row write addressed a satellite outside `[0, count)`.
    #[error("Satellite index {index} out of range for batch of {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// An output slice cannot hold one value per satellite.
    #[error("Output channel {channel} holds {actual} values, {required} required")]
    BufferTooSmall {
        channel: String,
        required: usize,
        actual: usize,
    },

    /// A result buffer was sized for a different batch.
    #[error("Result capacity {actual} does not match batch capacity {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Elements rejected by upstream validation.
    #[error("Invalid element {field}: {message}")]
    InvalidElements { field: String, message: String },

    /// No geophysical preset with this name.
    #[error("Unknown geophysical model '{0}'")]
    UnknownModel(String),
}

pub type Sgp4Result<T> = Result<T, Sgp4Error>;

impl Sgp4Error {
    pub fn allocation_failure(buffer: &str, elements: usize) -> Self {
        Self::AllocationFailure {
            buffer: buffer.to_string(),
            elements,
        }
    }

    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    pub fn buffer_too_small(channel: &str, required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            channel: channel.to_string(),
            required,
            actual,
        }
    }

    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    pub fn invalid_elements(field: &str, reason: &str) -> Self {
        Self::InvalidElements {
            field: field.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` when the caller can correct its input and retry.
    ///
    /// Allocation failures and rejected elements are not retried: the first
    /// means the process is out of memory, the second means the TLE is bad.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AllocationFailure { .. } | Self::InvalidElements { .. } => false,
            Self::IndexOutOfRange { .. }
            | Self::BufferTooSmall { .. }
            | Self::ShapeMismatch { .. }
            | Self::UnknownModel(_) => true,
        }
    }
}
