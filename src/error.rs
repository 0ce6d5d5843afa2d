//! Errors for the operations that can fail.
//!
//! Inserting a duplicate or missing a lookup are not errors; those are
//! reported through `bool`/`Option` returns on [`Tree`][crate::tree::Tree].

use thiserror::Error;

/// Failures when moving payloads between a tree and a
/// [`SequenceBuffer`][crate::sequence::SequenceBuffer].
///
/// Whenever one of these is returned, neither the tree nor the buffer has
/// been modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The tree has more payloads than the buffer has slots.
    #[error("buffer holds {capacity} slots but {needed} are needed")]
    CapacityExceeded {
        /// Slots required.
        needed: usize,
        /// Slots available.
        capacity: usize,
    },

    /// Payloads can only be moved into an empty buffer.
    #[error("buffer already holds {occupied} payloads")]
    BufferNotEmpty {
        /// Slots already in use.
        occupied: usize,
    },

    /// The occupied slots do not form a single run starting at slot 0.
    #[error("slot {index} is occupied after an empty slot")]
    NonContiguous {
        /// The first occupied slot found after a gap.
        index: usize,
    },

    /// The occupied slots are not in strictly ascending order.
    #[error("slot {index} is not greater than the slot before it")]
    Unsorted {
        /// The first slot out of order.
        index: usize,
    },
}

/// Failures of the demo driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Reading the input or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A tree/buffer conversion was rejected.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
