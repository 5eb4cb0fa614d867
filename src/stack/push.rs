// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::BlockStack};

// External imports
use log::{debug, trace};

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// Pushes `item` onto the stack; if the stack is full, `item` is dropped
    /// and the stack is left unchanged.
    ///
    /// Check [`is_full`](Self::is_full) first, or use
    /// [`try_push`](Self::try_push), when the caller needs to know.
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.try_push(item).is_err() {
            debug!("push on full stack (max_size {}), item dropped", self.max_size);
        }
    }

    /// Pushes `item` if the stack is not full; returns [`Error::Full`] otherwise.
    ///
    /// May reallocate the buffer by one block. On error the stack is unchanged.
    pub fn try_push(&mut self, item: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Full);
        }
        if self.items.len() == self.capacity {
            self.grow();
        }

        self.items.push(item);
        Ok(())
    }

    // Called with `len == capacity` on a stack that is not full, so a bounded
    // stack has `capacity < max_size` here and the clamp still grows.
    fn grow(&mut self) {
        let mut new_capacity = self.capacity.saturating_add(Self::BLOCK_SIZE);
        if self.max_size != 0 {
            new_capacity = new_capacity.min(self.max_size);
        }

        trace!(
            "growing stack buffer from {} to {} slots",
            self.capacity,
            new_capacity
        );

        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }
}
