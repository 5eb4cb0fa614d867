// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::BlockStack};

// External imports
use log::debug;

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// Removes and returns the top element, or `T::default()` if the stack is
    /// empty. Never shrinks the buffer.
    #[inline]
    pub fn pop(&mut self) -> T
    where
        T: Default,
    {
        match self.items.pop() {
            Some(item) => item,
            None => {
                debug!("pop on empty stack, returning default");
                T::default()
            }
        }
    }

    /// Removes and returns the top element; returns [`Error::Empty`] if there
    /// is none.
    #[inline]
    pub fn try_pop(&mut self) -> Result<T, Error> {
        self.items.pop().ok_or(Error::Empty)
    }
}
