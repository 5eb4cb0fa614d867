// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::vec::Vec;

// Crate imports
use crate::stack::BlockStack;

impl<T> BlockStack<T> {
    /// Constructs an empty, unbounded stack with the default block size.
    #[inline]
    pub fn new() -> Self {
        Self::unbounded()
    }

    /// Constructs an empty stack holding at most `max_size` elements, with the
    /// default block size. A `max_size` of `0` means unbounded.
    #[inline]
    pub fn with_max_size(max_size: usize) -> Self {
        Self::bounded(max_size)
    }
}

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// Constructs an empty, unbounded stack.
    #[inline]
    pub fn unbounded() -> Self {
        Self::bounded(0)
    }

    /// Constructs an empty stack holding at most `max_size` elements.
    ///
    /// `BLOCK` slots are reserved immediately, whatever `max_size` is, so the
    /// first pushes do not reallocate. A `max_size` of `0` means unbounded.
    pub fn bounded(max_size: usize) -> Self {
        let capacity = Self::BLOCK_SIZE;
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            max_size,
        }
    }
}

impl<T, const BLOCK: usize> Default for BlockStack<T, BLOCK> {
    /// An empty, unbounded stack.
    fn default() -> Self {
        Self::unbounded()
    }
}
