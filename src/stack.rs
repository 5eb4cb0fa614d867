// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BlockStack` type and its inherent API.
//!
//! `BlockStack<T, BLOCK>` is a LIFO container over one owned, contiguous
//! buffer. The buffer grows `BLOCK` slots at a time and never shrinks; an
//! optional bound caps the logical length. Methods are split by operation into
//! the submodules of this module.

mod clone;
mod new;
mod peek;
mod pop;
mod push;
mod take;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Number of slots reserved up front and added on every growth step when no
/// `BLOCK` parameter is given.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// A last-in-first-out stack over a contiguous buffer that grows in blocks of
/// `BLOCK` slots, optionally bounded by a maximum size.
///
/// # Layout and invariants
///
/// Internally, `BlockStack<T, BLOCK>` maintains:
///
/// - an owned buffer holding the `len` live elements in push order, the last
///   one being the top of the stack;
/// - `capacity`, the number of slots reserved by the block policy, with
///   `len <= capacity` at all times;
/// - `max_size`, the bound on `len`, where `0` means unbounded. When bounded,
///   `len <= max_size` at all times.
///
/// [`is_empty`](Self::is_empty) and [`is_full`](Self::is_full) are computed
/// from these on every call.
///
/// # Growth
///
/// The buffer starts with `BLOCK` reserved slots, whatever the bound. A push
/// that finds `len == capacity` on a stack that is not full reserves exactly
/// `BLOCK` more slots (fewer if the bound is closer), moving the live elements
/// into the new allocation. Pops never release storage.
///
/// Growth is additive. Pushing `n` elements into an unbounded stack
/// reallocates `n / BLOCK` times, so prefer a larger `BLOCK` for large stacks.
///
/// # Boundary behavior
///
/// | Condition                | Saturating API                | Fallible API          |
/// |--------------------------|-------------------------------|-----------------------|
/// | push when full           | item dropped, no change       | `Err(Error::Full)`    |
/// | pop when empty           | `T::default()`, len stays 0   | `Err(Error::Empty)`   |
/// | peek when empty          | `T::default()`                | `top()` is `None`     |
///
/// # Copy and move
///
/// - `clone` / `clone_from` produce a fully independent stack with the same
///   elements, bound and capacity.
/// - [`take`](Self::take) and [`move_from`](Self::move_from) transfer the
///   buffer in O(1) and leave the source empty and unbounded.
///
/// # Examples
///
/// ```rust
/// use block_stack::BlockStack;
///
/// let mut s: BlockStack<u32> = BlockStack::new();
/// for i in 0..9 {
///     s.push(i);
/// }
/// assert_eq!(s.len(), 9);
/// assert_eq!(s.capacity(), 16);
/// assert_eq!(s.pop(), 8);
///
/// let mut small: BlockStack<u32, 4> = BlockStack::bounded(6);
/// for i in 0..10 {
///     small.push(i);
/// }
/// assert!(small.is_full());
/// assert_eq!(small.capacity(), 6);
/// assert_eq!(small.peek(), 5);
/// ```
pub struct BlockStack<T, const BLOCK: usize = { DEFAULT_BLOCK_SIZE }> {
    pub(crate) items: Vec<T>,
    pub(crate) capacity: usize,
    pub(crate) max_size: usize,
}

impl<T, const BLOCK: usize> BlockStack<T, BLOCK> {
    /// The growth block of this stack type. Using a zero block fails to compile.
    pub const BLOCK_SIZE: usize = {
        assert!(BLOCK > 0, "BlockStack block size must be non-zero");
        BLOCK
    };

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the stack is bounded and holds `max_size` elements.
    ///
    /// An unbounded stack is never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_size != 0 && self.items.len() >= self.max_size
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the configured bound, or `0` for an unbounded stack.
    #[inline]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the number of slots reserved by the block policy.
    ///
    /// This is always a multiple of `BLOCK`, except for a bounded stack that
    /// has grown up to its bound.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many more pushes fit before the bound is reached, or `None`
    /// for an unbounded stack.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        (self.max_size != 0).then(|| self.max_size.saturating_sub(self.items.len()))
    }

    /// Drops every element. Capacity and bound are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: fmt::Debug, const BLOCK: usize> fmt::Debug for BlockStack<T, BLOCK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockStack")
            .field("len", &self.items.len())
            .field("max_size", &self.max_size)
            .field("elements", &self.items.as_slice())
            .finish()
    }
}

// Equality and hashing see the bound and the live elements, not the capacity.
impl<T: PartialEq, const BLOCK: usize> PartialEq for BlockStack<T, BLOCK> {
    fn eq(&self, other: &Self) -> bool {
        self.max_size == other.max_size && self.items == other.items
    }
}
impl<T: Eq, const BLOCK: usize> Eq for BlockStack<T, BLOCK> {}
impl<T: Hash, const BLOCK: usize> Hash for BlockStack<T, BLOCK> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.max_size.hash(state);
        self.items.as_slice().hash(state);
    }
}
