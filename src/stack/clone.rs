// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::vec::Vec;

// Crate imports
use crate::stack::BlockStack;

// A clone reserves the source's capacity, not just its length, so both stacks
// reallocate at the same points afterwards.
impl<T: Clone, const BLOCK: usize> Clone for BlockStack<T, BLOCK> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            max_size: self.max_size,
        }
    }

    /// Overwrites `self` with a deep copy of `source`, reusing `self`'s
    /// allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.items.clone_from(&source.items);
        self.items.reserve_exact(source.capacity - self.items.len());
        self.capacity = source.capacity;
        self.max_size = source.max_size;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::BlockStack;

    #[test]
    fn test_clone_is_deep() {
        let mut s1: BlockStack<i32> = BlockStack::with_max_size(1);
        s1.push(5);
        let mut s2 = s1.clone();
        assert!(!s2.is_empty());
        assert!(s2.is_full());
        assert_eq!(s1.len(), 1);
        assert_eq!(s2.pop(), 5);
        assert_eq!(s1.len(), 1);
        assert_eq!(s1.pop(), 5);
        assert_eq!(s1.max_size(), 1);
    }

    #[test]
    fn test_clone_from_is_deep() {
        let mut s1: BlockStack<i32> = BlockStack::with_max_size(1);
        s1.push(5);
        let mut s2: BlockStack<i32> = BlockStack::new();
        s2.push(7);
        s2.push(8);
        s2.clone_from(&s1);
        assert!(!s2.is_empty());
        assert!(s2.is_full());
        assert_eq!(s2.max_size(), 1);
        assert_eq!(s2.len(), 1);
        assert_eq!(s2.pop(), 5);
        assert_eq!(s1.pop(), 5);
        assert_eq!(s1.max_size(), 1);
    }

    #[test]
    fn test_clone_of_empty_keeps_bound() {
        let s: BlockStack<i32> = BlockStack::with_max_size(3);
        let c = s.clone();
        assert!(c.is_empty());
        assert_eq!(c.max_size(), 3);
    }

    #[test]
    fn test_clone_mirrors_capacity() {
        let mut s: BlockStack<i32> = BlockStack::new();
        for i in 0..17 {
            s.push(i);
        }
        let mut c = s.clone();
        assert_eq!(c.capacity(), s.capacity());
        assert_eq!(c, s);

        c.push(100);
        assert_eq!(c.len(), 18);
        assert_eq!(s.len(), 17);
        assert_eq!(s.peek(), 16);

        let mut big: BlockStack<i32> = BlockStack::new();
        for i in 0..40 {
            big.push(i);
        }
        big.clone_from(&s);
        assert_eq!(big.capacity(), s.capacity());
        assert_eq!(big, s);
    }
}
