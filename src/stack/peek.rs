// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::BlockStack;

// External imports
use log::debug;

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// Returns a copy of the top element, or `T::default()` if the stack is
    /// empty. The stack is not modified.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> T
    where
        T: Clone + Default,
    {
        match self.items.last() {
            Some(item) => item.clone(),
            None => {
                debug!("peek on empty stack, returning default");
                T::default()
            }
        }
    }

    /// Returns the top element, if any.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the top element mutably, if any.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }
}
