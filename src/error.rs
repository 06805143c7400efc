//! The error type shared by every container in this crate.
//!
//! There are only two ways a container operation can go wrong: the allocator
//! refused to hand out a buffer, or a caller asked for an index that isn't
//! populated. Everything else (inserting, searching, traversing, clearing)
//! has no error path.

use thiserror::Error;

/// Errors produced by container operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// An indexed access fell outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of populated slots at the time of the access.
        len: usize,
    },

    /// A backing buffer could not be allocated.
    #[error("failed to allocate a buffer for {capacity} elements")]
    AllocationFailure {
        /// The number of elements the buffer needed to hold.
        capacity: usize,
    },
}

impl ContainerError {
    /// Create an out of range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create an allocation failure error.
    pub fn allocation_failure(capacity: usize) -> Self {
        Self::AllocationFailure { capacity }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Returns an [`OutOfRange`][ContainerError::OutOfRange] error unless `index < len`.
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ContainerError::out_of_range(index, len))
    }
}
