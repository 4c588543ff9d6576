// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by every container in the crate.
//!
//! Errors are `Copy`, carry no payload, and implement `core::error::Error`.
//! They are returned immediately at the point of violation; no operation
//! retries or leaves a container half-modified.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A length did not match a fixed shape.
    ///
    /// Returned when building a [`FixedArray`](crate::FixedArray) from a slice
    /// of the wrong length, when assigning between differently sized fixed
    /// containers, and when a vector/matrix initializer is longer than its shape.
    SizeMismatch,
    /// An index or position did not refer to a live element of the container.
    IndexOutOfRange,
    /// The operation requires at least one element.
    EmptyContainer,
    /// Scalar division by zero on a vector or matrix.
    DivideByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch => f.write_str("size mismatch"),
            Self::IndexOutOfRange => f.write_str("index out of range"),
            Self::EmptyContainer => f.write_str("container is empty"),
            Self::DivideByZero => f.write_str("cannot divide by 0"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::IndexOutOfRange);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_messages_are_distinct() {
        let all = [
            Error::SizeMismatch,
            Error::IndexOutOfRange,
            Error::EmptyContainer,
            Error::DivideByZero,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
        assert_eq!(Error::DivideByZero.to_string(), "cannot divide by 0");
    }
}
