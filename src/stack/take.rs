// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::BlockStack;

// Core imports
use core::mem;

// External imports
use log::trace;

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// Moves the contents out of `self` in O(1), returning them as a new stack
    /// with the same elements, bound and capacity.
    ///
    /// `self` is left empty and unbounded, with a freshly reserved block.
    ///
    /// ```rust
    /// use block_stack::BlockStack;
    ///
    /// let mut source: BlockStack<i32> = BlockStack::with_max_size(2);
    /// source.push(5);
    /// let mut destination = source.take();
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.max_size(), 0);
    /// assert_eq!(destination.max_size(), 2);
    /// assert_eq!(destination.pop(), 5);
    /// ```
    #[must_use = "use `clear` to discard the contents instead"]
    pub fn take(&mut self) -> Self {
        trace!("moving {} elements out of stack", self.items.len());
        mem::replace(self, Self::unbounded())
    }

    /// Replaces the contents of `self` with those of `source`, dropping what
    /// `self` held. `source` is left empty and unbounded.
    #[inline]
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BlockStack, DEFAULT_BLOCK_SIZE};

    #[test]
    fn test_take_moves_data() {
        let mut source: BlockStack<i32> = BlockStack::with_max_size(2);
        source.push(5);
        assert_eq!(source.len(), 1);
        assert_eq!(source.max_size(), 2);

        let mut destination = source.take();
        assert_eq!(source.len(), 0);
        assert_eq!(destination.len(), 1);
        assert_eq!(source.max_size(), 0);
        assert_eq!(destination.max_size(), 2);
        assert_eq!(destination.pop(), 5);
    }

    #[test]
    fn test_move_from_deals_with_size() {
        let mut source: BlockStack<i32> = BlockStack::with_max_size(2);
        source.push(5);

        let mut destination: BlockStack<i32> = BlockStack::new();
        destination.push(1);
        destination.push(2);
        destination.push(3);
        destination.move_from(&mut source);
        assert_eq!(source.len(), 0);
        assert_eq!(destination.len(), 1);
        assert_eq!(source.max_size(), 0);
        assert_eq!(destination.max_size(), 2);
        assert_eq!(destination.pop(), 5);
    }

    #[test]
    fn test_take_transfers_buffer_and_resets_source() {
        let mut source: BlockStack<i32> = BlockStack::new();
        for i in 0..20 {
            source.push(i);
        }
        let ptr = source.top().map(|t| t as *const i32);

        let destination = source.take();
        assert_eq!(destination.top().map(|t| t as *const i32), ptr);
        assert_eq!(destination.capacity(), 24);
        assert_eq!(source.capacity(), DEFAULT_BLOCK_SIZE);

        // The moved-from stack is fully usable and independent.
        source.push(99);
        assert_eq!(source.peek(), 99);
        assert_eq!(destination.peek(), 19);
    }
}
