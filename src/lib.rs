// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `block-stack`
//!
//! A `no_std` + `alloc`, last-in-first-out container over a single contiguous,
//! heap-allocated buffer that grows in fixed-size blocks and may be bounded by
//! a maximum size.
//!
//! The core type, [`BlockStack<T, BLOCK>`], owns one buffer and tracks a
//! logical length `len` against the number of reserved slots (`capacity`).
//! Only the top of the stack is reachable: push, pop and peek, plus size
//! queries. There is no iteration, no indexing and no insertion in the middle.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want a stack with a hard ceiling on its size, where overflow should
//!   saturate instead of failing.
//! - You want allocation to happen in predictable, fixed-size steps.
//! - You want `pop`/`peek` on an empty stack to be harmless.
//!
//! It may not be the best fit if:
//!
//! - You push very many elements into an unbounded stack. Growth is additive
//!   (`BLOCK` slots at a time), not geometric, so the total copying cost grows
//!   quadratically with the number of elements divided by `BLOCK`.
//! - You need to traverse or index the contents.
//!
//! ## Growth and bounds
//!
//! - A new stack reserves `BLOCK` slots up front (8 by default) regardless of
//!   its bound, so the first pushes never reallocate.
//! - A push that finds `len == capacity` grows the buffer by exactly `BLOCK`
//!   slots, clamped to the bound when the stack is bounded.
//! - `pop` never shrinks the buffer.
//! - A bound of `0` means "unbounded".
//!
//! ## Saturating vs fallible operations
//!
//! Boundary conditions never panic. They come in two flavors:
//!
//! - **Saturating** (the primary API):
//!   - [`BlockStack::push`] on a full stack silently drops the item.
//!   - [`BlockStack::pop`] and [`BlockStack::peek`] on an empty stack return
//!     `T::default()`.
//! - **Fallible**: [`BlockStack::try_push`] returns [`Error::Full`] and
//!   [`BlockStack::try_pop`] returns [`Error::Empty`], leaving the stack
//!   unchanged.
//!
//! Because a saturating `pop` shares its return channel with legitimately
//! default-valued elements, check [`BlockStack::is_empty`] first (or use
//! [`BlockStack::try_pop`]) when the distinction matters.
//!
//! ## Copy and move
//!
//! - [`Clone`] performs a deep copy: the clone owns its own buffer with the
//!   same contents, bound and capacity as the source.
//! - [`BlockStack::take`] moves the contents out in O(1), leaving the source
//!   empty and unbounded with a fresh buffer.
//!
//! ## Logging
//!
//! Buffer growth and moves are reported at `trace` level and saturated
//! operations at `debug` level through the [`log`] facade. The crate never
//! installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use block_stack::BlockStack;
//!
//! let mut s: BlockStack<i32> = BlockStack::with_max_size(2);
//! s.push(5);
//! s.push(55);
//! s.push(555); // full: dropped
//! assert_eq!(s.peek(), 55);
//! assert_eq!(s.pop(), 55);
//! assert_eq!(s.pop(), 5);
//! assert_eq!(s.pop(), 0); // empty: default value
//! assert!(s.is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod stack;

// Public exports (crate API surface)
pub use error::Error;
pub use stack::{BlockStack, DEFAULT_BLOCK_SIZE};
