// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-length `i32` buffers with an explicit, checked release lifecycle.
//!
//! This crate provides an owned heap buffer whose storage is returned to the
//! allocator exactly once, no matter how the caller ends its lifetime.
//!
//! # Buffer Types
//!
//! ## IntBuffer
//!
//! Single-owner storage for `len` signed 32-bit integers:
//! - Length is fixed at creation and never changes
//! - Elements are left uninitialized (no zero-fill)
//! - `release(self)` consumes the buffer, so releasing it twice does not compile
//! - Dropping a live buffer releases it through the same path
//!
//! ## BufferHandle
//!
//! Runtime-checked slot around an `IntBuffer`:
//! - Tracks the `Live` / `Released` state
//! - `release(&mut self)` on a released or never-created handle fails with
//!   [`BufferError::DoubleRelease`] and touches no storage
//!
//! # Zero-length Buffers
//!
//! `create(0)` succeeds with an empty buffer. No allocation is performed and
//! releasing it performs no deallocation.
//!
//! # Example: IntBuffer
//!
//! ```rust
//! use intbuf::{BufferError, IntBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let buffer = IntBuffer::create(10_000)?;
//!     assert_eq!(buffer.len(), 10_000);
//!
//!     buffer.release();
//!     // buffer.release(); // error[E0382]: use of moved value
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: BufferHandle
//!
//! ```rust
//! use intbuf::{BufferError, BufferHandle};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut handle = BufferHandle::create(10_000)?;
//!
//!     handle.release()?;
//!     assert!(matches!(handle.release(), Err(BufferError::DoubleRelease)));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod handle;
mod int_buffer;
mod system;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use error::BufferError;
pub use handle::BufferHandle;
pub use int_buffer::IntBuffer;
pub use system::SystemAllocator;
pub use traits::RawAllocator;
