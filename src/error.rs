// This file is part of block-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the fallible `BlockStack` API.
//!
//! The saturating operations never produce these; only the `try_*` methods do.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible operations on [`BlockStack`](crate::BlockStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The stack is bounded and already holds `max_size` elements.
    Full,
    /// The stack holds no elements.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("stack is full"),
            Self::Empty => f.write_str("stack is empty"),
        }
    }
}

impl CoreError for Error {}
