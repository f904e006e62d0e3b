// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BufferHandle - runtime-checked Live/Released slot around an IntBuffer.

use crate::error::BufferError;
use crate::int_buffer::IntBuffer;
use crate::system::SystemAllocator;
use crate::traits::RawAllocator;

/// A handle that owns at most one [`IntBuffer`].
///
/// A handle is `Live` from `create` until its first successful `release`, and
/// `Released` afterwards. `BufferHandle::default()` (or
/// `BufferHandle::released()`) is a handle that never held a buffer and starts
/// out `Released`.
pub struct BufferHandle<A: RawAllocator = SystemAllocator> {
    buffer: Option<IntBuffer<A>>,
}

impl BufferHandle {
    /// Creates a live handle over a buffer of `len` elements from the global allocator.
    pub fn create(len: usize) -> Result<Self, BufferError> {
        Self::create_in(len, SystemAllocator)
    }

    /// Returns a handle that never held a buffer. Its first `release` fails.
    pub fn released() -> Self {
        Self { buffer: None }
    }
}

impl Default for BufferHandle {
    fn default() -> Self {
        Self::released()
    }
}

impl<A: RawAllocator> BufferHandle<A> {
    /// Creates a live handle over a buffer of `len` elements from `allocator`.
    ///
    /// On error no handle exists and nothing was allocated.
    pub fn create_in(len: usize, allocator: A) -> Result<Self, BufferError> {
        let buffer = IntBuffer::create_in(len, allocator)?;

        Ok(Self {
            buffer: Some(buffer),
        })
    }

    /// Releases the buffer and moves the handle to `Released`.
    ///
    /// # Errors
    ///
    /// [`BufferError::DoubleRelease`] if the handle is not live. No storage is
    /// touched in that case.
    pub fn release(&mut self) -> Result<(), BufferError> {
        let buffer = self.buffer.take().ok_or(BufferError::DoubleRelease)?;
        buffer.release();

        Ok(())
    }

    /// Returns true while the handle owns a buffer.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the buffer length, or `None` once released.
    #[inline]
    pub fn live_len(&self) -> Option<usize> {
        self.buffer.as_ref().map(|buffer| buffer.len())
    }

    /// Borrows the live buffer.
    ///
    /// # Errors
    ///
    /// [`BufferError::DoubleRelease`] if the handle is not live (released or
    /// never created).
    pub fn buffer(&self) -> Result<&IntBuffer<A>, BufferError> {
        self.buffer.as_ref().ok_or(BufferError::DoubleRelease)
    }
}

impl<A: RawAllocator> core::fmt::Debug for BufferHandle<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.buffer {
            Some(buffer) => f.debug_tuple("BufferHandle::Live").field(buffer).finish(),
            None => f.write_str("BufferHandle::Released"),
        }
    }
}
