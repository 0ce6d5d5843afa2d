//! A fixed-capacity row of payload slots used to move payloads in and out of
//! a [`Tree`][crate::tree::Tree] without copying them.
//!
//! Every slot either owns one [`Payload`] or is empty. A well-formed buffer
//! holds its payloads in a single run starting at slot 0, in strictly
//! ascending order, followed only by empty slots. That is the shape
//! [`Tree::to_sorted_sequence`][crate::tree::Tree::to_sorted_sequence]
//! produces and the shape
//! [`Tree::from_sorted_sequence`][crate::tree::Tree::from_sorted_sequence]
//! insists on.
//!
//! # Examples
//!
//! ```
//! use bintree::{Payload, SequenceBuffer};
//!
//! let mut buffer = SequenceBuffer::with_capacity(2);
//! buffer.push(Payload::from("a")).unwrap();
//! buffer.push(Payload::from("b")).unwrap();
//!
//! // No room left.
//! assert!(buffer.push(Payload::from("c")).is_err());
//! assert_eq!(buffer.to_string(), "a b");
//! ```

use std::fmt;

use crate::error::SequenceError;
use crate::payload::Payload;

/// Capacity of [`SequenceBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Owned payload slots with a capacity fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceBuffer<T = String> {
    slots: Vec<Option<Payload<T>>>,
}

impl<T> Default for SequenceBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceBuffer<T> {
    /// An empty buffer with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty buffer with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Total number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots, gaps or not. On a well-formed buffer this
    /// is the length of the run starting at slot 0.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Places `payload` in the slot after the last occupied one.
    ///
    /// Fails with [`SequenceError::CapacityExceeded`] when that slot would be
    /// past the end of the buffer.
    pub fn push(&mut self, payload: Payload<T>) -> Result<(), SequenceError> {
        let next = self
            .slots
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);

        match self.slots.get_mut(next) {
            Some(slot) => {
                *slot = Some(payload);
                Ok(())
            }
            None => Err(SequenceError::CapacityExceeded {
                needed: next + 1,
                capacity: self.capacity(),
            }),
        }
    }

    /// The payload in slot `index`, if that slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&Payload<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Direct access to slot `index`. `None` if `index` is out of range.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Option<Payload<T>>> {
        self.slots.get_mut(index)
    }

    /// Empties slot `index`, handing its payload to the caller.
    pub fn take(&mut self, index: usize) -> Option<Payload<T>> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Iterates over the occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Payload<T>> {
        self.slots.iter().flatten()
    }

    /// Drops every payload, leaving all slots empty.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<Payload<T>>] {
        &mut self.slots
    }

    /// Checks that the buffer is well-formed and returns the length of its
    /// occupied run.
    pub(crate) fn sorted_run(&self) -> Result<usize, SequenceError>
    where
        T: Ord,
    {
        let run = self
            .slots
            .iter()
            .position(Option::is_none)
            .unwrap_or_else(|| self.capacity());

        if let Some(offset) = self.slots[run..].iter().position(Option::is_some) {
            return Err(SequenceError::NonContiguous { index: run + offset });
        }

        let mut previous: Option<&Payload<T>> = None;
        for (index, payload) in self.slots[..run].iter().flatten().enumerate() {
            if previous.map_or(false, |previous| previous >= payload) {
                return Err(SequenceError::Unsorted { index });
            }
            previous = Some(payload);
        }

        Ok(run)
    }
}

impl<T: fmt::Display> fmt::Display for SequenceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, payload) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", payload)?;
        }
        Ok(())
    }
}
