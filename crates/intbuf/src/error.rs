// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for intbuf.
use thiserror::Error;

/// Errors that can occur when creating or releasing buffers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide storage for the requested length.
    #[error("allocation of {bytes} bytes failed")]
    Allocation {
        /// Size of the rejected request in bytes.
        bytes: usize,
    },

    /// The requested length does not fit in a valid allocation layout.
    #[error("capacity overflow: {length} elements exceed the maximum layout size")]
    CapacityOverflow {
        /// Requested number of elements.
        length: usize,
    },

    /// The handle does not hold a live buffer (already released or never created).
    #[error("buffer is not live (already released or never created)")]
    DoubleRelease,
}
