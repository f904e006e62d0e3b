// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! IntBuffer - owned, fixed-length `i32` storage.
//!
//! The buffer holds exactly one allocation and hands it back to its allocator
//! exactly once, either through `release()` or on drop.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::BufferError;
use crate::system::SystemAllocator;
use crate::traits::RawAllocator;

/// Owned storage for a fixed number of `i32` elements.
///
/// Elements are uninitialized. The type is neither `Clone` nor `Send`: a
/// buffer has exactly one owner on exactly one thread.
///
/// `release` takes the buffer by value, so a second release on the same
/// buffer is rejected at compile time:
///
/// ```rust,compile_fail
/// use intbuf::IntBuffer;
///
/// let buffer = IntBuffer::create(16).unwrap();
/// buffer.release();
/// buffer.release();
/// ```
pub struct IntBuffer<A: RawAllocator = SystemAllocator> {
    // None once the storage has been handed back
    ptr: Option<NonNull<i32>>,
    len: usize,
    layout: Layout,
    allocator: A,
}

impl IntBuffer {
    /// Creates a buffer of `len` elements backed by the global allocator.
    ///
    /// A zero `len` yields an empty buffer without allocating.
    pub fn create(len: usize) -> Result<Self, BufferError> {
        Self::create_in(len, SystemAllocator)
    }
}

impl<A: RawAllocator> IntBuffer<A> {
    /// Creates a buffer of `len` elements backed by `allocator`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `len` elements do not fit in a layout.
    ///   The allocator is not called.
    /// - [`BufferError::Allocation`] if the allocator returns no storage.
    pub fn create_in(len: usize, allocator: A) -> Result<Self, BufferError> {
        let layout =
            Layout::array::<i32>(len).map_err(|_| BufferError::CapacityOverflow { length: len })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: Some(NonNull::dangling()),
                len,
                layout,
                allocator,
            });
        }

        let ptr = allocator
            .allocate(layout)
            .ok_or(BufferError::Allocation {
                bytes: layout.size(),
            })?;

        Ok(Self {
            ptr: Some(ptr.cast::<i32>()),
            len,
            layout,
            allocator,
        })
    }

    /// Returns the number of elements the buffer was created with.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the storage to the allocator and consumes the buffer.
    pub fn release(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        let Some(ptr) = self.ptr.take() else {
            return;
        };

        if self.layout.size() == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): ptr came from self.allocator with
        // self.layout, and take() guarantees this branch runs at most once
        unsafe { self.allocator.deallocate(ptr.cast::<u8>(), self.layout) }
    }
}

impl<A: RawAllocator> Drop for IntBuffer<A> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<A: RawAllocator> core::fmt::Debug for IntBuffer<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
